pub mod keys;
pub mod nostr_utils;

pub use keys::{
    derive_public_key, generate_private_key, generate_private_key_with, get_public_key_hex,
    is_valid_public_key_hex, Keypair,
};
