//! NIP-19: bech32-encoded entities.
//!
//! Simple entities (`npub`, `nsec`, `note`) carry exactly 32 raw bytes.
//! Composite entities (`nprofile`, `nevent`, `naddr`) carry a TLV payload,
//! see [`crate::encoding::tlv`].

use std::fmt;
use std::str::FromStr;

use crate::encoding::{bits, checksum, TlvSequence, TlvType};
use crate::error::{Nip19Error, Result};
use crate::util::{bytes_to_32, hex_to_bytes};

pub const PREFIX_NPUB: &str = "npub";
pub const PREFIX_NSEC: &str = "nsec";
pub const PREFIX_NOTE: &str = "note";
pub const PREFIX_NPROFILE: &str = "nprofile";
pub const PREFIX_NEVENT: &str = "nevent";
pub const PREFIX_NADDR: &str = "naddr";

/// Recognized by the wider protocol but not decoded here.
const UNSUPPORTED_PREFIXES: [&str; 2] = ["ncryptsec", "nrelay"];

/// Human-readable prefix of every entity this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Npub,
    Nsec,
    Note,
    Nprofile,
    Nevent,
    Naddr,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Npub => PREFIX_NPUB,
            Prefix::Nsec => PREFIX_NSEC,
            Prefix::Note => PREFIX_NOTE,
            Prefix::Nprofile => PREFIX_NPROFILE,
            Prefix::Nevent => PREFIX_NEVENT,
            Prefix::Naddr => PREFIX_NADDR,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = Nip19Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            PREFIX_NPUB => Ok(Prefix::Npub),
            PREFIX_NSEC => Ok(Prefix::Nsec),
            PREFIX_NOTE => Ok(Prefix::Note),
            PREFIX_NPROFILE => Ok(Prefix::Nprofile),
            PREFIX_NEVENT => Ok(Prefix::Nevent),
            PREFIX_NADDR => Ok(Prefix::Naddr),
            other if UNSUPPORTED_PREFIXES.contains(&other) => Err(
                Nip19Error::UnsupportedOrUnimplemented(format!("{other} decoding")),
            ),
            other => Err(Nip19Error::UnknownPrefix(other.to_string())),
        }
    }
}

/// Entities whose payload is a bare 32-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleKind {
    PublicKey,
    SecretKey,
    Note,
}

impl SimpleKind {
    pub fn prefix(self) -> Prefix {
        match self {
            SimpleKind::PublicKey => Prefix::Npub,
            SimpleKind::SecretKey => Prefix::Nsec,
            SimpleKind::Note => Prefix::Note,
        }
    }
}

/// `nprofile`: a pubkey plus relay hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePointer {
    pub public_key: [u8; 32],
    pub relays: Vec<String>,
}

impl ProfilePointer {
    pub fn new(public_key: [u8; 32]) -> Self {
        Self {
            public_key,
            relays: Vec::new(),
        }
    }

    pub fn relay(mut self, url: impl Into<String>) -> Self {
        self.relays.push(url.into());
        self
    }

    pub fn relays<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relays.extend(urls.into_iter().map(Into::into));
        self
    }

    fn to_tlv(&self) -> TlvSequence {
        let mut seq = TlvSequence::new();
        seq.push(TlvType::Special, self.public_key);
        push_relays(&mut seq, &self.relays);
        seq
    }

    fn from_tlv(seq: &TlvSequence) -> Result<Self> {
        let public_key = seq
            .first(TlvType::Special)
            .ok_or(Nip19Error::MissingField("pubkey"))
            .and_then(bytes_to_32)?;
        Ok(Self {
            public_key,
            relays: read_relays(seq)?,
        })
    }

    pub fn to_bech32(&self) -> Result<String> {
        encode_tlv(Prefix::Nprofile, &self.to_tlv())
    }
}

/// `nevent`: an event id with optional author, kind and relay hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPointer {
    pub id: [u8; 32],
    pub relays: Vec<String>,
    pub author: Option<[u8; 32]>,
    pub kind: Option<u32>,
}

impl EventPointer {
    pub fn new(id: [u8; 32]) -> Self {
        Self {
            id,
            relays: Vec::new(),
            author: None,
            kind: None,
        }
    }

    pub fn author(mut self, author: [u8; 32]) -> Self {
        self.author = Some(author);
        self
    }

    pub fn kind(mut self, kind: u32) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn relay(mut self, url: impl Into<String>) -> Self {
        self.relays.push(url.into());
        self
    }

    pub fn relays<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relays.extend(urls.into_iter().map(Into::into));
        self
    }

    fn to_tlv(&self) -> TlvSequence {
        let mut seq = TlvSequence::new();
        seq.push(TlvType::Special, self.id);
        push_relays(&mut seq, &self.relays);
        if let Some(author) = self.author {
            seq.push(TlvType::Author, author);
        }
        if let Some(kind) = self.kind {
            seq.push(TlvType::Kind, kind.to_be_bytes());
        }
        seq
    }

    fn from_tlv(seq: &TlvSequence) -> Result<Self> {
        let id = seq
            .first(TlvType::Special)
            .ok_or(Nip19Error::MissingField("event id"))
            .and_then(bytes_to_32)?;
        let author = seq.first(TlvType::Author).map(bytes_to_32).transpose()?;
        let kind = seq.first(TlvType::Kind).map(read_kind).transpose()?;
        Ok(Self {
            id,
            relays: read_relays(seq)?,
            author,
            kind,
        })
    }

    pub fn to_bech32(&self) -> Result<String> {
        encode_tlv(Prefix::Nevent, &self.to_tlv())
    }
}

/// `naddr`: coordinate of a parameterized replaceable event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPointer {
    pub author: [u8; 32],
    pub kind: u32,
    /// The `d` tag; may be empty.
    pub identifier: String,
    pub relays: Vec<String>,
}

impl AddressPointer {
    pub fn new(author: [u8; 32], kind: u32, identifier: impl Into<String>) -> Self {
        Self {
            author,
            kind,
            identifier: identifier.into(),
            relays: Vec::new(),
        }
    }

    pub fn relay(mut self, url: impl Into<String>) -> Self {
        self.relays.push(url.into());
        self
    }

    pub fn relays<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relays.extend(urls.into_iter().map(Into::into));
        self
    }

    fn to_tlv(&self) -> TlvSequence {
        let mut seq = TlvSequence::new();
        seq.push(TlvType::Special, self.identifier.as_bytes());
        push_relays(&mut seq, &self.relays);
        seq.push(TlvType::Author, self.author);
        seq.push(TlvType::Kind, self.kind.to_be_bytes());
        seq
    }

    fn from_tlv(seq: &TlvSequence) -> Result<Self> {
        let identifier = seq
            .first(TlvType::Special)
            .ok_or(Nip19Error::MissingField("identifier"))
            .and_then(|b| read_utf8("identifier", b))?;
        let author = seq
            .first(TlvType::Author)
            .ok_or(Nip19Error::MissingField("author"))
            .and_then(bytes_to_32)?;
        let kind = seq
            .first(TlvType::Kind)
            .ok_or(Nip19Error::MissingField("kind"))
            .and_then(read_kind)?;
        Ok(Self {
            author,
            kind,
            identifier,
            relays: read_relays(seq)?,
        })
    }

    pub fn to_bech32(&self) -> Result<String> {
        encode_tlv(Prefix::Naddr, &self.to_tlv())
    }
}

/// Any TLV-backed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositeIdentifier {
    Profile(ProfilePointer),
    Event(EventPointer),
    Address(AddressPointer),
}

impl CompositeIdentifier {
    pub fn prefix(&self) -> Prefix {
        match self {
            CompositeIdentifier::Profile(_) => Prefix::Nprofile,
            CompositeIdentifier::Event(_) => Prefix::Nevent,
            CompositeIdentifier::Address(_) => Prefix::Naddr,
        }
    }

    pub fn to_bech32(&self) -> Result<String> {
        match self {
            CompositeIdentifier::Profile(p) => p.to_bech32(),
            CompositeIdentifier::Event(e) => e.to_bech32(),
            CompositeIdentifier::Address(a) => a.to_bech32(),
        }
    }
}

impl From<ProfilePointer> for CompositeIdentifier {
    fn from(p: ProfilePointer) -> Self {
        CompositeIdentifier::Profile(p)
    }
}

impl From<EventPointer> for CompositeIdentifier {
    fn from(e: EventPointer) -> Self {
        CompositeIdentifier::Event(e)
    }
}

impl From<AddressPointer> for CompositeIdentifier {
    fn from(a: AddressPointer) -> Self {
        CompositeIdentifier::Address(a)
    }
}

/// A decoded bech32 entity of any supported kind.
#[derive(Clone, PartialEq, Eq)]
pub enum Nip19Entity {
    Simple { kind: SimpleKind, bytes: [u8; 32] },
    Composite(CompositeIdentifier),
}

impl Nip19Entity {
    pub fn prefix(&self) -> Prefix {
        match self {
            Nip19Entity::Simple { kind, .. } => kind.prefix(),
            Nip19Entity::Composite(c) => c.prefix(),
        }
    }

    pub fn to_bech32(&self) -> Result<String> {
        match self {
            Nip19Entity::Simple { kind, bytes } => encode_bytes(*kind, bytes),
            Nip19Entity::Composite(c) => c.to_bech32(),
        }
    }
}

impl fmt::Debug for Nip19Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nip19Entity::Simple {
                kind: SimpleKind::SecretKey,
                ..
            } => f
                .debug_struct("Simple")
                .field("kind", &SimpleKind::SecretKey)
                .field("bytes", &"[redacted]")
                .finish(),
            Nip19Entity::Simple { kind, bytes } => f
                .debug_struct("Simple")
                .field("kind", kind)
                .field("bytes", &hex::encode(bytes))
                .finish(),
            Nip19Entity::Composite(c) => f.debug_tuple("Composite").field(c).finish(),
        }
    }
}

impl From<CompositeIdentifier> for Nip19Entity {
    fn from(c: CompositeIdentifier) -> Self {
        Nip19Entity::Composite(c)
    }
}

impl FromStr for Nip19Entity {
    type Err = Nip19Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

/// Encode hex-encoded raw material as `npub`, `nsec` or `note`.
pub fn encode_simple(kind: SimpleKind, raw_hex: &str) -> Result<String> {
    let bytes = hex_to_bytes(raw_hex)?;
    encode_bytes(kind, &bytes_to_32(&bytes)?)
}

pub fn encode_bytes(kind: SimpleKind, bytes: &[u8; 32]) -> Result<String> {
    checksum::encode(kind.prefix().as_str(), &bits::to_groups(bytes))
}

pub fn encode_composite(identifier: &CompositeIdentifier) -> Result<String> {
    identifier.to_bech32()
}

/// Decode any supported entity. Uppercase input is accepted.
pub fn decode(s: &str) -> Result<Nip19Entity> {
    let (prefix, groups) = checksum::decode(s)?;
    decode_groups(&prefix, &groups)
}

/// [`decode`] with a ceiling on the input length.
pub fn decode_with_limit(s: &str, limit: usize) -> Result<Nip19Entity> {
    let (prefix, groups) = checksum::decode_with_limit(s, limit)?;
    decode_groups(&prefix, &groups)
}

fn decode_groups(prefix: &str, groups: &[bech32::u5]) -> Result<Nip19Entity> {
    let prefix: Prefix = prefix.parse()?;
    let data = bits::from_groups(groups, false)?;
    tracing::trace!(%prefix, len = data.len(), "decoded bech32 payload");

    let simple = |kind| -> Result<Nip19Entity> {
        Ok(Nip19Entity::Simple {
            kind,
            bytes: bytes_to_32(&data)?,
        })
    };

    match prefix {
        Prefix::Npub => simple(SimpleKind::PublicKey),
        Prefix::Nsec => simple(SimpleKind::SecretKey),
        Prefix::Note => simple(SimpleKind::Note),
        Prefix::Nprofile => {
            let seq = TlvSequence::decode(&data)?;
            Ok(CompositeIdentifier::Profile(ProfilePointer::from_tlv(&seq)?).into())
        }
        Prefix::Nevent => {
            let seq = TlvSequence::decode(&data)?;
            Ok(CompositeIdentifier::Event(EventPointer::from_tlv(&seq)?).into())
        }
        Prefix::Naddr => {
            let seq = TlvSequence::decode(&data)?;
            Ok(CompositeIdentifier::Address(AddressPointer::from_tlv(&seq)?).into())
        }
    }
}

fn encode_tlv(prefix: Prefix, seq: &TlvSequence) -> Result<String> {
    let bytes = seq.encode()?;
    checksum::encode(prefix.as_str(), &bits::to_groups(&bytes))
}

fn push_relays(seq: &mut TlvSequence, relays: &[String]) {
    for relay in relays {
        seq.push(TlvType::Relay, relay.as_bytes());
    }
}

fn read_relays(seq: &TlvSequence) -> Result<Vec<String>> {
    seq.all(TlvType::Relay)
        .map(|b| read_utf8("relay", b))
        .collect()
}

fn read_utf8(field: &'static str, bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| Nip19Error::InvalidField {
        field,
        reason: e.to_string(),
    })
}

fn read_kind(bytes: &[u8]) -> Result<u32> {
    let be: [u8; 4] = bytes.try_into().map_err(|_| Nip19Error::InvalidField {
        field: "kind",
        reason: format!("expected 4 bytes, got {}", bytes.len()),
    })?;
    Ok(u32::from_be_bytes(be))
}
