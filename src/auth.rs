//! Signed-request construction.
//!
//! The bridge re-derives the canonical message from the request it
//! receives, so the layout below must match it byte for byte:
//!
//! ```text
//! <METHOD>\n<PATH>\n<PAYLOAD>
//! ```
//!
//! `PAYLOAD` is the raw query string for GET and DELETE and the exact
//! body bytes for every other method.

use reqwest::Method;

use crate::error::Result;
use crate::signer::Signer;

/// Header carrying the hex-encoded public key
pub const PUBKEY_HEADER: &str = "x-pubkey";

/// Header carrying the hex-encoded signature
pub const SIGNATURE_HEADER: &str = "x-signature";

/// Identity headers attached to one protected request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub pubkey: String,
    pub signature: String,
}

/// Build the canonical message for a request.
pub fn canonical_message(method: &Method, path: &str, query: Option<&str>, body: &[u8]) -> Vec<u8> {
    let payload: &[u8] = if *method == Method::GET || *method == Method::DELETE {
        query.unwrap_or_default().as_bytes()
    } else {
        body
    };

    let mut message = Vec::with_capacity(method.as_str().len() + path.len() + payload.len() + 2);
    message.extend_from_slice(method.as_str().as_bytes());
    message.push(b'\n');
    message.extend_from_slice(path.as_bytes());
    message.push(b'\n');
    message.extend_from_slice(payload);
    message
}

/// Sign a request and produce its identity headers.
pub fn sign_request(
    signer: &dyn Signer,
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: &[u8],
) -> Result<AuthHeaders> {
    let message = canonical_message(method, path, query, body);
    let signature = signer.sign(&message)?;

    Ok(AuthHeaders {
        pubkey: signer.public_key_hex(),
        signature: hex::encode(signature),
    })
}
