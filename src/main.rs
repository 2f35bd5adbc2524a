use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod types;

use crate::cli::{Cli, Command};
use nostr_identity_utility::{is_valid_public_key_hex, Defaults};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Defaults::LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Keygen { count, out } => {
            let records = commands::keygen::generate(count)?;
            commands::keygen::emit(records, out)?;
            Ok(())
        }

        Command::Pubkey { secret } => {
            let out = commands::pubkey::run(&secret)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }

        Command::Encode { uri, target } => {
            println!("{}", commands::encode::run(&target, uri)?);
            Ok(())
        }

        Command::Decode { input, strict_length } => {
            let out = commands::decode::run(&input, strict_length)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }

        Command::CheckPubkey { hex } => {
            if !is_valid_public_key_hex(&hex) {
                bail!("not a valid public key: expected 64 lowercase hex characters");
            }
            println!("✓ valid");
            Ok(())
        }
    }
}
