//! Public key management (`/keys`)
//!
//! Every operation here is protected and fails with
//! [`BridgeError::AuthenticationRequired`](crate::BridgeError::AuthenticationRequired)
//! before touching the network when the client has no signer.

use reqwest::{Method, StatusCode};

use crate::client::{read_json, read_optional_json, require_status, require_success, BridgeClient};
use crate::error::Result;
use crate::types::{KeyRecord, RegisterKeyRequest};

/// Keys endpoints, borrowed from a [`BridgeClient`]
pub struct KeysService<'a> {
    client: &'a BridgeClient,
}

impl<'a> KeysService<'a> {
    pub(crate) fn new(client: &'a BridgeClient) -> Self {
        Self { client }
    }

    /// List the public keys registered to the authenticated user, in server order
    pub async fn list(&self) -> Result<Vec<KeyRecord>> {
        let signer = self.client.signer()?;

        let response = self
            .client
            .execute(Method::GET, "/keys", None, Some(signer))
            .await?;
        let response = require_success(response).await?;

        read_json(response).await
    }

    /// Register a hex-encoded public key with the authenticated user.
    ///
    /// Any 2xx is success. The echoed record is returned when the server
    /// sends one; an empty or unrecognised body yields `None`.
    pub async fn register(&self, key_hex: &str) -> Result<Option<KeyRecord>> {
        let signer = self.client.signer()?;

        let body = serde_json::to_vec(&RegisterKeyRequest { key: key_hex })?;
        let response = self
            .client
            .execute(Method::POST, "/keys", Some(body), Some(signer))
            .await?;
        let response = require_success(response).await?;

        read_optional_json(response).await
    }

    /// Remove a registered public key; only 204 counts as success
    pub async fn delete(&self, key_hex: &str) -> Result<()> {
        let signer = self.client.signer()?;

        let path = format!("/keys/{}", urlencoding::encode(key_hex));
        let response = self
            .client
            .execute(Method::DELETE, &path, None, Some(signer))
            .await?;
        require_status(response, StatusCode::NO_CONTENT).await?;

        Ok(())
    }
}
