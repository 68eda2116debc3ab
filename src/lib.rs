//! Rust client for the Storj bridge API
//!
//! Covers user registration and public-key management. Protected calls are
//! authenticated by signing a canonical form of each request with a
//! secp256k1 key and sending the result in `x-pubkey`/`x-signature`.
//!
//! # Example
//!
//! ```rust,no_run
//! use storj_bridge::{BridgeClient, BridgeConfig, Credential};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credential = Credential::from_hex(
//!     "0000000000000000000000000000000000000000000000000000000000000001",
//! )?;
//!
//! let client = BridgeClient::new(BridgeConfig {
//!     base_url: "http://localhost:6382".into(),
//!     ..Default::default()
//! })?
//! .with_credential(credential);
//!
//! for record in client.keys().list().await? {
//!     println!("{} -> {}", record.key, record.user);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod keys;
pub mod signer;
pub mod types;
pub mod users;

// Re-export main types
pub use auth::{AuthHeaders, PUBKEY_HEADER, SIGNATURE_HEADER};
pub use client::BridgeClient;
pub use error::{BridgeError, Result};
pub use keys::KeysService;
pub use signer::{Credential, Signer};
pub use types::*;
pub use users::{hash_password, UsersService};
