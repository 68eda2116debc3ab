//! Types for the bridge client API

use serde::{Deserialize, Serialize};

/// Default bridge endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.storj.io";

/// Client configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL for the bridge HTTP API
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("storj-bridge-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A public key registered with the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    /// Hex-encoded compressed secp256k1 public key
    pub key: String,
    /// Owning user (email)
    pub user: String,
}

/// Request body for key registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterKeyRequest<'a> {
    pub key: &'a str,
}

/// A bridge user account
///
/// `password` holds plaintext until [`UsersService::create`](crate::users::UsersService::create)
/// replaces it with its SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_partner: Option<String>,
}

impl User {
    /// Create a user with only the required fields set.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            pubkey: None,
            referral_partner: None,
        }
    }

    /// Attach a public key to register alongside the account.
    pub fn with_pubkey(mut self, pubkey: impl Into<String>) -> Self {
        self.pubkey = Some(pubkey.into());
        self
    }

    /// Attach a referral partner code.
    pub fn with_referral_partner(mut self, partner: impl Into<String>) -> Self {
        self.referral_partner = Some(partner.into());
        self
    }
}

/// Error body the bridge returns alongside failure statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
