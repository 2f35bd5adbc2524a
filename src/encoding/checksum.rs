//! Checksummed bech32 text encoding (BIP-173, original constant).
//!
//! Decoding imposes no overall length ceiling; composite identifiers are
//! longer than the 90 characters BIP-173 allows. Use [`decode_with_limit`]
//! when the ceiling matters.

use bech32::{u5, Variant};

use crate::error::{Nip19Error, Result};

/// Render `prefix 1 data checksum`.
pub fn encode(prefix: &str, groups: &[u5]) -> Result<String> {
    Ok(bech32::encode(prefix, groups, Variant::Bech32)?)
}

/// Split, verify and strip the checksum. The returned prefix is lowercase.
///
/// Strings carrying a bech32m checksum are rejected as a mismatch, since
/// they do not verify against the original constant.
pub fn decode(s: &str) -> Result<(String, Vec<u5>)> {
    let (prefix, groups, variant) = bech32::decode(s)?;
    if variant != Variant::Bech32 {
        return Err(Nip19Error::ChecksumMismatch);
    }
    Ok((prefix, groups))
}

/// [`decode`], refusing inputs longer than `limit` characters.
pub fn decode_with_limit(s: &str, limit: usize) -> Result<(String, Vec<u5>)> {
    let len = s.chars().count();
    if len > limit {
        return Err(Nip19Error::ExceedsLengthLimit { len, limit });
    }
    decode(s)
}
