use anyhow::{Context, Result};

use nostr_identity_utility::nip19::{
    AddressPointer, CompositeIdentifier, EventPointer, Nip19Entity, ProfilePointer, SimpleKind,
};
use nostr_identity_utility::util::hex_to_32;
use nostr_identity_utility::nip21;

use crate::cli::EncodeTarget;

pub fn run(target: &EncodeTarget, uri: bool) -> Result<String> {
    let entity = build(target)?;
    let rendered = if uri {
        nip21::to_nostr_uri(&entity)?
    } else {
        entity.to_bech32()?
    };
    Ok(rendered)
}

fn build(target: &EncodeTarget) -> Result<Nip19Entity> {
    let simple = |kind: SimpleKind, hex: &str| -> Result<Nip19Entity> {
        let bytes = hex_to_32(hex).with_context(|| format!("{} payload", kind.prefix()))?;
        Ok(Nip19Entity::Simple { kind, bytes })
    };

    let composite: CompositeIdentifier = match target {
        EncodeTarget::Npub { hex } => return simple(SimpleKind::PublicKey, hex),
        EncodeTarget::Nsec { hex } => return simple(SimpleKind::SecretKey, hex),
        EncodeTarget::Note { hex } => return simple(SimpleKind::Note, hex),
        EncodeTarget::Nprofile { pubkey, relays } => {
            ProfilePointer::new(hex_to_32(pubkey).context("pubkey")?)
                .relays(relays.iter().cloned())
                .into()
        }
        EncodeTarget::Nevent {
            id,
            author,
            kind,
            relays,
        } => {
            let mut pointer =
                EventPointer::new(hex_to_32(id).context("event id")?).relays(relays.iter().cloned());
            if let Some(author) = author {
                pointer = pointer.author(hex_to_32(author).context("author")?);
            }
            if let Some(kind) = kind {
                pointer = pointer.kind(*kind);
            }
            pointer.into()
        }
        EncodeTarget::Naddr {
            author,
            kind,
            identifier,
            relays,
        } => AddressPointer::new(hex_to_32(author).context("author")?, *kind, identifier.as_str())
            .relays(relays.iter().cloned())
            .into(),
    };
    Ok(composite.into())
}
