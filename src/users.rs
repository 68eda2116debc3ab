//! User registration (`/users`)

use reqwest::{Method, StatusCode};
use sha2::{Digest, Sha256};

use crate::client::{require_status, BridgeClient};
use crate::error::{BridgeError, Result};
use crate::types::User;

/// Users endpoints, borrowed from a [`BridgeClient`]
pub struct UsersService<'a> {
    client: &'a BridgeClient,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a BridgeClient) -> Self {
        Self { client }
    }

    /// Register a new user account.
    ///
    /// The plaintext password is replaced by its SHA-256 hex digest before
    /// serialization and is dropped with the consumed `user`. This call is
    /// unauthenticated and succeeds only on 201 Created.
    pub async fn create(&self, mut user: User) -> Result<()> {
        if user.password.is_empty() {
            return Err(BridgeError::Validation("password field empty".to_string()));
        }

        user.password = hash_password(&user.password);
        let body = serde_json::to_vec(&user)?;
        drop(user);

        let response = self
            .client
            .execute(Method::POST, "/users", Some(body), None)
            .await?;
        require_status(response, StatusCode::CREATED).await?;

        Ok(())
    }
}

/// Hash a password the way the bridge expects it: lower-case hex SHA-256.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
