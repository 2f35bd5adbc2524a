use clap::{Parser, Subcommand};
use std::path::PathBuf;

use nostr_identity_utility::Defaults;

/// Offline nostr identity utility: key generator + NIP-19 codec
#[derive(Parser, Debug)]
#[command(version, about = "Offline nostr identity utility")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate nostr keys (hex, nsec, npub)
    Keygen {
        /// Number of keypairs to generate
        #[arg(long, default_value_t = Defaults::KEYGEN_COUNT)]
        count: u32,

        /// Optional path to write JSON output (pretty-printed)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Derive the x-only public key from a secret key (hex or nsec)
    Pubkey {
        /// 64 hex chars (optional 0x) or nsec1...
        secret: String,
    },

    /// Encode raw hex or a pointer as a bech32 identifier
    Encode {
        /// Render as a nostr: URI
        #[arg(long, global = true)]
        uri: bool,

        #[command(subcommand)]
        target: EncodeTarget,
    },

    /// Decode a bech32 identifier or nostr: URI to JSON
    Decode {
        input: String,

        /// Refuse inputs longer than the 90 character bech32 ceiling
        #[arg(long)]
        strict_length: bool,
    },

    /// Exit non-zero unless the argument is 64 lowercase hex chars
    CheckPubkey { hex: String },
}

#[derive(Subcommand, Debug)]
pub enum EncodeTarget {
    /// Public key
    Npub { hex: String },

    /// Private key
    Nsec { hex: String },

    /// Event id
    Note { hex: String },

    /// Profile pointer
    Nprofile {
        pubkey: String,

        /// Relay hint (repeatable)
        #[arg(long = "relay")]
        relays: Vec<String>,
    },

    /// Event pointer
    Nevent {
        id: String,

        /// Author pubkey (hex)
        #[arg(long)]
        author: Option<String>,

        /// Event kind
        #[arg(long)]
        kind: Option<u32>,

        /// Relay hint (repeatable)
        #[arg(long = "relay")]
        relays: Vec<String>,
    },

    /// Parameterized replaceable event address
    Naddr {
        author: String,
        kind: u32,
        identifier: String,

        /// Relay hint (repeatable)
        #[arg(long = "relay")]
        relays: Vec<String>,
    },
}
