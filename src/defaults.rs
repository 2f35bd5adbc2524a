//! Central place for all default values.
//! Update these and the whole crate picks them up.

pub struct Defaults;

impl Defaults {
    /* URIs (NIP-21) */
    pub const URI_SCHEME: &'static str = "nostr:";

    /* Bech32 */
    /// Ceiling from BIP-173. Composite identifiers routinely exceed it, so it is opt-in.
    pub const BECH32_STANDARD_LIMIT: usize = 90;

    /* Key generation */
    pub const MAX_KEY_SAMPLING_ATTEMPTS: u32 = 64;
    pub const KEYGEN_COUNT: u32 = 1;

    /* Logging */
    pub const LOG_FILTER: &'static str = "warn";
}
