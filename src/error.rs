//! Error type shared by the codec and key helpers.

use thiserror::Error;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Nip19Error>;

/// Everything that can go wrong while encoding, decoding or deriving keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Nip19Error {
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(String),

    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("unknown prefix '{0}'")]
    UnknownPrefix(String),

    #[error("invalid bech32 character {0:?}")]
    InvalidCharacter(char),

    #[error("bech32 checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid padding in 5-bit groups")]
    InvalidPadding,

    #[error("group value {0} does not fit the source bit width")]
    InvalidGroupValue(u8),

    #[error("missing '1' separator")]
    MissingSeparator,

    #[error("mixed-case bech32 string")]
    MixedCase,

    #[error("malformed bech32 string: {0}")]
    MalformedBech32(&'static str),

    #[error("bech32 string is {len} characters, limit is {limit}")]
    ExceedsLengthLimit { len: usize, limit: usize },

    #[error("truncated TLV field type {field_type}: declared {declared} bytes, {remaining} remaining")]
    TruncatedTlv {
        field_type: u8,
        declared: usize,
        remaining: usize,
    },

    #[error("TLV field type {field_type} is {len} bytes, maximum is 255")]
    FieldTooLong { field_type: u8, len: usize },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("unsupported or unimplemented: {0}")]
    UnsupportedOrUnimplemented(String),

    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid nostr URI: {0}")]
    InvalidUri(String),
}

impl From<hex::FromHexError> for Nip19Error {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidHexEncoding(e.to_string())
    }
}

#[allow(unreachable_patterns)]
impl From<bech32::Error> for Nip19Error {
    fn from(e: bech32::Error) -> Self {
        match e {
            bech32::Error::MissingSeparator => Self::MissingSeparator,
            bech32::Error::InvalidChecksum => Self::ChecksumMismatch,
            bech32::Error::InvalidLength => {
                Self::MalformedBech32("prefix or data part has an invalid length")
            }
            // bech32 reports non-ASCII input one byte at a time, so `c` is not the real character.
            bech32::Error::InvalidChar(c) if !c.is_ascii() => {
                Self::MalformedBech32("contains non-ASCII characters")
            }
            bech32::Error::InvalidChar(c) => Self::InvalidCharacter(c),
            bech32::Error::InvalidData(v) => Self::InvalidGroupValue(v),
            bech32::Error::InvalidPadding => Self::InvalidPadding,
            bech32::Error::MixedCase => Self::MixedCase,
            _ => Self::MalformedBech32("unrecognized bech32 failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bech32_errors_map_to_codec_errors() {
        assert_eq!(
            Nip19Error::from(bech32::Error::InvalidChecksum),
            Nip19Error::ChecksumMismatch
        );
        assert_eq!(
            Nip19Error::from(bech32::Error::InvalidChar('b')),
            Nip19Error::InvalidCharacter('b')
        );
        assert_eq!(
            Nip19Error::from(bech32::Error::MixedCase),
            Nip19Error::MixedCase
        );
    }

    #[test]
    fn non_ascii_input_is_not_blamed_on_a_byte() {
        assert_eq!(
            Nip19Error::from(bech32::Error::InvalidChar('\u{f0}')),
            Nip19Error::MalformedBech32("contains non-ASCII characters")
        );
        assert_eq!(
            crate::nip19::decode("\u{1f600}1qqqqqq"),
            Err(Nip19Error::MalformedBech32("contains non-ASCII characters"))
        );
    }

    #[test]
    fn hex_errors_are_invalid_hex_encoding() {
        let err: Nip19Error = hex::decode("abc").unwrap_err().into();
        assert!(matches!(err, Nip19Error::InvalidHexEncoding(_)));
    }
}
