use crate::error::{Nip19Error, Result};
use crate::nip19::{self, Nip19Entity, SimpleKind};
use crate::util::hex_to_32;

pub fn nsec_from_sk32(sk: &[u8; 32]) -> Result<String> {
    nip19::encode_bytes(SimpleKind::SecretKey, sk)
}

pub fn npub_from_xonly32(x: &[u8; 32]) -> Result<String> {
    nip19::encode_bytes(SimpleKind::PublicKey, x)
}

/// Parse a secret key input as either:
/// - hex (64 hex chars, optional 0x/0X prefix), or
/// - bech32 "nsec1..." (payload must be exactly 32 bytes)
pub fn secret_key_from_input(input: &str) -> Result<[u8; 32]> {
    let s = input.trim();

    if s.to_ascii_lowercase().starts_with("nsec1") {
        return match nip19::decode(s)? {
            Nip19Entity::Simple {
                kind: SimpleKind::SecretKey,
                bytes,
            } => Ok(bytes),
            other => Err(Nip19Error::InvalidField {
                field: "secret key",
                reason: format!("expected nsec, got {}", other.prefix()),
            }),
        };
    }

    hex_to_32(s)
}
