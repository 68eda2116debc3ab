//! Error types for the bridge client

use thiserror::Error;

/// Bridge client error
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A protected operation was attempted without a configured signer
    #[error("authentication required")]
    AuthenticationRequired,

    /// Local input rejected before any request was made
    #[error("validation failed: {0}")]
    Validation(String),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered outside the operation's success set
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Signing the canonical message failed
    #[error("signing failed: {0}")]
    Signing(String),

    /// Private key material could not be parsed
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Client configuration is unusable
    #[error("configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    /// HTTP status of an unexpected server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            BridgeError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
