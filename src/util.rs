// src/util.rs
use crate::error::{Nip19Error, Result};

/// Decode hex (optionally 0x/0X-prefixed) into bytes.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>> {
    let t = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    Ok(hex::decode(t)?)
}

/// Decode hex into exactly 32 bytes.
pub fn hex_to_32(s: &str) -> Result<[u8; 32]> {
    let bytes = hex_to_bytes(s)?;
    bytes_to_32(&bytes)
}

pub fn bytes_to_32(bytes: &[u8]) -> Result<[u8; 32]> {
    bytes.try_into().map_err(|_| Nip19Error::InvalidLength {
        expected: 32,
        got: bytes.len(),
    })
}
