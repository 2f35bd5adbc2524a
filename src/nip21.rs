//! NIP-21: `nostr:` URI scheme.

use crate::defaults::Defaults;
use crate::error::{Nip19Error, Result};
use crate::nip19::{self, Nip19Entity, SimpleKind};

/// Strip a leading `nostr:` (any case), if present.
pub fn strip_scheme(s: &str) -> &str {
    let scheme = Defaults::URI_SCHEME;
    match s.get(..scheme.len()) {
        Some(head) if head.eq_ignore_ascii_case(scheme) => &s[scheme.len()..],
        _ => s,
    }
}

/// Render an entity as `nostr:<bech32>`. Secret keys are refused.
pub fn to_nostr_uri(entity: &Nip19Entity) -> Result<String> {
    reject_secret(entity)?;
    Ok(format!("{}{}", Defaults::URI_SCHEME, entity.to_bech32()?))
}

/// Parse a `nostr:` URI. The scheme is mandatory here.
pub fn from_nostr_uri(uri: &str) -> Result<Nip19Entity> {
    let body = strip_scheme(uri);
    if body.len() == uri.len() {
        return Err(Nip19Error::InvalidUri(format!(
            "missing '{}' scheme",
            Defaults::URI_SCHEME
        )));
    }
    let entity = nip19::decode(body)?;
    reject_secret(&entity)?;
    Ok(entity)
}

fn reject_secret(entity: &Nip19Entity) -> Result<()> {
    if let Nip19Entity::Simple {
        kind: SimpleKind::SecretKey,
        ..
    } = entity
    {
        return Err(Nip19Error::InvalidUri(
            "nsec must not be shared as a nostr: URI".to_string(),
        ));
    }
    Ok(())
}
