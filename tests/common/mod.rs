//! Shared fixtures for the bridge integration tests

#![allow(dead_code)]

use k256::ecdsa::signature::Verifier;
use k256::ecdsa::{Signature, VerifyingKey};
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use storj_bridge::auth::canonical_message;
use storj_bridge::{BridgeClient, BridgeConfig, Credential, PUBKEY_HEADER, SIGNATURE_HEADER};
use wiremock::{Request, Respond, ResponseTemplate};

/// Fixed test key so failures are reproducible
pub const TEST_PRIVATE_KEY: &str = "e8c94a2a5b52a2f1bd8c7ec4d4d6c6f2a1bdf33ad02e41d0e3b56cfd0d5f0c11";

pub fn test_credential() -> Credential {
    Credential::from_hex(TEST_PRIVATE_KEY).unwrap()
}

/// Client with no signer, pointed at the mock server
pub fn anonymous_client(base_url: &str) -> BridgeClient {
    BridgeClient::new(BridgeConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap()
}

/// Client signing with [`test_credential`]
pub fn authenticated_client(base_url: &str) -> BridgeClient {
    anonymous_client(base_url).with_credential(test_credential())
}

pub fn header_str<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Assert the request carries identity headers whose signature verifies
/// over the canonical form of what the server actually received.
pub fn assert_signed_by(request: &Request, credential: &Credential) {
    use storj_bridge::Signer;

    let pubkey = header_str(request, PUBKEY_HEADER).expect("missing x-pubkey header");
    let signature = header_str(request, SIGNATURE_HEADER).expect("missing x-signature header");
    assert!(!pubkey.is_empty());
    assert!(!signature.is_empty());
    assert_eq!(pubkey, credential.public_key_hex());

    let method = Method::from_bytes(request.method.as_str().as_bytes()).unwrap();
    let message = canonical_message(&method, request.url.path(), request.url.query(), &request.body);

    let verifying_key = VerifyingKey::from_sec1_bytes(&hex::decode(pubkey).unwrap()).unwrap();
    let signature = Signature::from_der(&hex::decode(signature).unwrap()).unwrap();
    verifying_key
        .verify(&message, &signature)
        .expect("x-signature does not verify over the canonical request");
}

/// In-memory user store behind a mock `/users` endpoint.
///
/// Each test builds its own registry, so no state leaks between tests.
#[derive(Clone, Default)]
pub struct UserRegistry {
    users: Arc<Mutex<HashMap<String, String>>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored (hashed) password for an email
    pub fn password_of(&self, email: &str) -> Option<String> {
        self.users.lock().unwrap().get(email).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl Respond for UserRegistry {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return ResponseTemplate::new(400).set_body_json(json!({"error": "Invalid JSON"}));
        };

        let (Some(email), Some(password)) = (
            body.get("email").and_then(Value::as_str),
            body.get("password").and_then(Value::as_str),
        ) else {
            return ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Missing email or password"}));
        };

        let mut users = self.users.lock().unwrap();
        if users.contains_key(email) {
            return ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Email is already registered"}));
        }
        users.insert(email.to_string(), password.to_string());

        ResponseTemplate::new(201).set_body_json(json!({"email": email, "activated": false}))
    }
}
