//! storj-bridge - command-line client for the Storj bridge API

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storj_bridge::config::{Args, Command, KeysCommand, UsersCommand};
use storj_bridge::{BridgeClient, Signer, User};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("storj_bridge={}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut client = BridgeClient::new(args.bridge_config()).context("building bridge client")?;
    if let Some(credential) = args.credential().context("parsing --private-key")? {
        debug!(pubkey = %credential.public_key_hex(), "Loaded credential");
        client = client.with_credential(credential);
    }

    match args.command {
        Command::Keys(KeysCommand::List) => {
            for record in client.keys().list().await? {
                println!("{}\t{}", record.key, record.user);
            }
        }
        Command::Keys(KeysCommand::Register { key }) => {
            match client.keys().register(&key).await? {
                Some(record) => info!(key = %record.key, user = %record.user, "Registered key"),
                None => info!(%key, "Registered key"),
            }
        }
        Command::Keys(KeysCommand::Delete { key }) => {
            client.keys().delete(&key).await?;
            info!(%key, "Deleted key");
        }
        Command::Keys(KeysCommand::Pubkey) => {
            let pubkey = client
                .public_key_hex()
                .context("no private key configured (set --private-key or STORJ_PRIVATE_KEY)")?;
            println!("{pubkey}");
        }
        Command::Users(UsersCommand::Create(create)) => {
            let mut user = User::new(create.email, create.password);
            user.pubkey = create.pubkey;
            user.referral_partner = create.referral_partner;

            let email = user.email.clone();
            client.users().create(user).await?;
            info!(%email, "Created user");
        }
    }

    Ok(())
}
