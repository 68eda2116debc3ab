//! Command-line configuration for the `storj-bridge` binary
//!
//! CLI arguments and environment variable handling using clap.

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::error::Result;
use crate::signer::Credential;
use crate::types::{BridgeConfig, DEFAULT_BASE_URL};

/// storj-bridge - talk to the Storj bridge API
#[derive(Parser, Debug, Clone)]
#[command(name = "storj-bridge")]
#[command(about = "Manage bridge users and public keys")]
pub struct Args {
    /// Bridge API base URL
    #[arg(long, env = "STORJ_BRIDGE", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Hex-encoded secp256k1 private key used to sign protected requests
    #[arg(long, env = "STORJ_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "STORJ_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Public key management
    #[command(subcommand)]
    Keys(KeysCommand),

    /// User registration
    #[command(subcommand)]
    Users(UsersCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum KeysCommand {
    /// List registered public keys
    List,
    /// Register a hex-encoded public key
    Register { key: String },
    /// Delete a registered public key
    Delete { key: String },
    /// Print the public key derived from --private-key
    Pubkey,
}

#[derive(Subcommand, Debug, Clone)]
pub enum UsersCommand {
    /// Create a new user account
    Create(CreateUserArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CreateUserArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "STORJ_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Public key to register with the account
    #[arg(long)]
    pub pubkey: Option<String>,

    #[arg(long)]
    pub referral_partner: Option<String>,
}

impl Args {
    /// Library configuration derived from the arguments
    pub fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..Default::default()
        }
    }

    /// Parse the configured private key, if one was given
    pub fn credential(&self) -> Result<Option<Credential>> {
        self.private_key
            .as_deref()
            .map(Credential::from_hex)
            .transpose()
    }
}
