//! Type-length-value payloads carried inside composite identifiers.
//!
//! Wire layout per field: `[u8 type][u8 length][length bytes value]`.
//! Unknown types survive a decode/encode cycle untouched.

use crate::error::{Nip19Error, Result};

/// Maximum value length a single field can declare.
pub const MAX_VALUE_LEN: usize = u8::MAX as usize;

/// Field types defined by NIP-19.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlvType {
    /// Primary value: pubkey (nprofile), event id (nevent), identifier (naddr).
    Special,
    /// Relay URL, repeatable.
    Relay,
    /// Author pubkey.
    Author,
    /// Event kind, 4-byte big-endian.
    Kind,
    /// Anything newer than this crate.
    Unknown(u8),
}

impl TlvType {
    pub fn as_u8(self) -> u8 {
        match self {
            TlvType::Special => 0,
            TlvType::Relay => 1,
            TlvType::Author => 2,
            TlvType::Kind => 3,
            TlvType::Unknown(t) => t,
        }
    }

    /// Only relays may legitimately appear more than once.
    pub fn is_repeatable(self) -> bool {
        matches!(self, TlvType::Relay)
    }
}

impl From<u8> for TlvType {
    fn from(t: u8) -> Self {
        match t {
            0 => TlvType::Special,
            1 => TlvType::Relay,
            2 => TlvType::Author,
            3 => TlvType::Kind,
            other => TlvType::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    pub field_type: TlvType,
    pub value: Vec<u8>,
}

impl TlvField {
    pub fn new(field_type: TlvType, value: impl Into<Vec<u8>>) -> Self {
        Self {
            field_type,
            value: value.into(),
        }
    }
}

/// Ordered fields, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvSequence {
    fields: Vec<TlvField>,
}

impl TlvSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field_type: TlvType, value: impl Into<Vec<u8>>) {
        self.fields.push(TlvField::new(field_type, value));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First occurrence wins for non-repeatable types; later duplicates are ignored.
    pub fn first(&self, field_type: TlvType) -> Option<&[u8]> {
        let mut matches = self.fields.iter().filter(|f| f.field_type == field_type);
        let first = matches.next()?;
        let ignored = matches.count();
        if ignored > 0 && !field_type.is_repeatable() {
            tracing::debug!(
                field_type = field_type.as_u8(),
                ignored,
                "ignoring duplicate TLV fields"
            );
        }
        Some(first.value.as_slice())
    }

    /// Every occurrence, in order.
    pub fn all(&self, field_type: TlvType) -> impl Iterator<Item = &[u8]> + '_ {
        self.fields
            .iter()
            .filter(move |f| f.field_type == field_type)
            .map(|f| f.value.as_slice())
    }

    pub fn unknown(&self) -> impl Iterator<Item = &TlvField> + '_ {
        self.fields
            .iter()
            .filter(|f| matches!(f.field_type, TlvType::Unknown(_)))
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let capacity = self.fields.iter().map(|f| 2 + f.value.len()).sum();
        let mut out = Vec::with_capacity(capacity);
        for field in &self.fields {
            if field.value.len() > MAX_VALUE_LEN {
                return Err(Nip19Error::FieldTooLong {
                    field_type: field.field_type.as_u8(),
                    len: field.value.len(),
                });
            }
            out.push(field.field_type.as_u8());
            out.push(field.value.len() as u8);
            out.extend_from_slice(&field.value);
        }
        Ok(out)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut fields = Vec::new();
        let mut rest = bytes;

        while let Some((&t, tail)) = rest.split_first() {
            let Some((&len, tail)) = tail.split_first() else {
                return Err(Nip19Error::TruncatedTlv {
                    field_type: t,
                    declared: 1,
                    remaining: 0,
                });
            };
            let len = len as usize;
            if tail.len() < len {
                return Err(Nip19Error::TruncatedTlv {
                    field_type: t,
                    declared: len,
                    remaining: tail.len(),
                });
            }
            let (value, tail) = tail.split_at(len);
            let field_type = TlvType::from(t);
            if let TlvType::Unknown(t) = field_type {
                tracing::trace!(field_type = t, len, "preserving unknown TLV field");
            }
            fields.push(TlvField::new(field_type, value));
            rest = tail;
        }

        Ok(Self { fields })
    }
}
