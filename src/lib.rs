//! Nostr identity primitives.
//!
//! - NIP-01: secp256k1 key generation and x-only public keys
//! - NIP-19: bech32-encoded entities (`npub`, `nsec`, `note`, `nprofile`, `nevent`, `naddr`)
//! - NIP-21: `nostr:` URIs
//!
//! ```
//! use nostr_identity_utility::nip19::{self, SimpleKind};
//!
//! let hex = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";
//! let npub = nip19::encode_simple(SimpleKind::PublicKey, hex).unwrap();
//! assert_eq!(npub, "npub180cvv07tjdrrgpa0j7j7tmnyl2yr6yr7l8j4s3evf6u64th6gkwsyjh6w6");
//! ```

pub mod crypto;
pub mod defaults;
pub mod encoding;
pub mod error;
pub mod nip19;
pub mod nip21;
pub mod util;

pub use crypto::{
    derive_public_key, generate_private_key, get_public_key_hex, is_valid_public_key_hex, Keypair,
};
pub use defaults::Defaults;
pub use error::{Nip19Error, Result};
pub use nip19::{
    decode, encode_composite, encode_simple, AddressPointer, CompositeIdentifier, EventPointer,
    Nip19Entity, Prefix, ProfilePointer, SimpleKind,
};
pub use nip21::{from_nostr_uri, to_nostr_uri};
