use anyhow::{Context, Result};

use nostr_identity_utility::{nip19, nip21, Defaults};

use crate::types::DecodedOut;

pub fn run(input: &str, strict_length: bool) -> Result<DecodedOut> {
    let input = input.trim();
    let has_scheme = nip21::strip_scheme(input).len() != input.len();

    let entity = if has_scheme {
        nip21::from_nostr_uri(input).context("decoding nostr: URI")?
    } else if strict_length {
        nip19::decode_with_limit(input, Defaults::BECH32_STANDARD_LIMIT)
            .context("decoding bech32")?
    } else {
        nip19::decode(input).context("decoding bech32")?
    };

    Ok(DecodedOut::from(&entity))
}
