use serde::Serialize;

use nostr_identity_utility::nip19::{CompositeIdentifier, Nip19Entity};

/// Output shape of `keygen`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    pub private_key_hex: String,
    pub public_key_hex: String,
    pub nsec: String,
    pub npub: String,
}

/// Output shape of `pubkey`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyOut {
    pub public_key_hex: String,
    pub npub: String,
}

/// Output shape of `decode`
#[derive(Debug, Serialize)]
pub struct DecodedOut {
    pub prefix: &'static str,
    pub data: DecodedOne,
}

/// Untagged so `data` is one of the ordered shapes below
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DecodedOne {
    Raw(RawDecoded),
    Profile(ProfileDecoded),
    Event(EventDecoded),
    Address(AddressDecoded),
}

#[derive(Debug, Serialize)]
pub struct RawDecoded {
    pub hex: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileDecoded {
    pub pubkey: String,
    pub relays: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EventDecoded {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<u32>,
    pub relays: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AddressDecoded {
    pub author: String,
    pub kind: u32,
    pub identifier: String,
    pub relays: Vec<String>,
}

impl From<&Nip19Entity> for DecodedOut {
    fn from(entity: &Nip19Entity) -> Self {
        let data = match entity {
            Nip19Entity::Simple { bytes, .. } => DecodedOne::Raw(RawDecoded {
                hex: hex::encode(bytes),
            }),
            Nip19Entity::Composite(CompositeIdentifier::Profile(p)) => {
                DecodedOne::Profile(ProfileDecoded {
                    pubkey: hex::encode(p.public_key),
                    relays: p.relays.clone(),
                })
            }
            Nip19Entity::Composite(CompositeIdentifier::Event(e)) => {
                DecodedOne::Event(EventDecoded {
                    id: hex::encode(e.id),
                    author: e.author.map(hex::encode),
                    kind: e.kind,
                    relays: e.relays.clone(),
                })
            }
            Nip19Entity::Composite(CompositeIdentifier::Address(a)) => {
                DecodedOne::Address(AddressDecoded {
                    author: hex::encode(a.author),
                    kind: a.kind,
                    identifier: a.identifier.clone(),
                    relays: a.relays.clone(),
                })
            }
        };
        DecodedOut {
            prefix: entity.prefix().as_str(),
            data,
        }
    }
}
