//! secp256k1 key generation and x-only public key derivation (NIP-01).

use rand_core::{CryptoRng, OsRng, RngCore};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use zeroize::Zeroize;

use crate::crypto::nostr_utils::{npub_from_xonly32, nsec_from_sk32};
use crate::defaults::Defaults;
use crate::error::{Nip19Error, Result};
use crate::util::hex_to_32;

/// Draw a private key from the operating system's CSPRNG.
pub fn generate_private_key() -> Result<[u8; 32]> {
    generate_private_key_with(&mut OsRng)
}

/// Rejection-sample a scalar in `[1, n-1]` from `rng`.
///
/// Candidates that are zero or not below the curve order are discarded and
/// redrawn, so every valid scalar is equally likely.
pub fn generate_private_key_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<[u8; 32]> {
    let mut candidate = [0u8; 32];
    for attempt in 1..=Defaults::MAX_KEY_SAMPLING_ATTEMPTS {
        rng.try_fill_bytes(&mut candidate)
            .map_err(|e| Nip19Error::RandomSourceFailure(e.to_string()))?;
        if SecretKey::from_slice(&candidate).is_ok() {
            return Ok(candidate);
        }
        tracing::debug!(attempt, "discarding out-of-range key candidate");
    }
    candidate.zeroize();
    Err(Nip19Error::RandomSourceFailure(format!(
        "no valid scalar after {} draws",
        Defaults::MAX_KEY_SAMPLING_ATTEMPTS
    )))
}

/// 32-byte x-only public key for a secret key.
pub fn derive_public_key(secret_key: &[u8; 32]) -> Result<[u8; 32]> {
    let sk = SecretKey::from_slice(secret_key)
        .map_err(|e| Nip19Error::InvalidSecretKey(e.to_string()))?;
    let pk = PublicKey::from_secret_key(&Secp256k1::signing_only(), &sk);
    let (x_only, _parity) = pk.x_only_public_key();
    Ok(x_only.serialize())
}

/// Hex in, hex out.
pub fn get_public_key_hex(secret_key_hex: &str) -> Result<String> {
    let mut sk = hex_to_32(secret_key_hex)?;
    let pk = derive_public_key(&sk);
    sk.zeroize();
    Ok(hex::encode(pk?))
}

/// True iff `pk` is exactly 64 lowercase hex characters.
pub fn is_valid_public_key_hex(pk: &str) -> bool {
    pk.len() == 64 && pk.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// A secret key with its x-only public key. The secret is zeroized on drop.
#[derive(Clone)]
pub struct Keypair {
    pub secret_key: [u8; 32],
    pub public_key: [u8; 32],
}

impl Keypair {
    pub fn generate() -> Result<Self> {
        let mut sk = generate_private_key()?;
        let kp = Self::from_secret_key(&sk);
        sk.zeroize();
        kp
    }

    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut sk = generate_private_key_with(rng)?;
        let kp = Self::from_secret_key(&sk);
        sk.zeroize();
        kp
    }

    pub fn from_secret_key(secret_key: &[u8; 32]) -> Result<Self> {
        Ok(Self {
            secret_key: *secret_key,
            public_key: derive_public_key(secret_key)?,
        })
    }

    pub fn secret_key_hex(&self) -> String {
        hex::encode(self.secret_key)
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    pub fn nsec(&self) -> Result<String> {
        nsec_from_sk32(&self.secret_key)
    }

    pub fn npub(&self) -> Result<String> {
        npub_from_xonly32(&self.public_key)
    }
}

impl Drop for Keypair {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key_hex())
            .field("secret_key", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// NIP-06 test vector 1.
    const SK_HEX: &str = "7f7ff03d123792d6ac594bfa67bf6d0c0ab55b6b1fdb6249303fe861f1ccba9a";
    const PK_HEX: &str = "17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917";

    /// Fails every request.
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
            Err(rand_core::Error::new("entropy source unavailable"))
        }
    }
    impl CryptoRng for BrokenRng {}

    /// Always yields the same byte, so every draw is out of range for 0x00 and 0xff.
    struct ConstantRng(u8);

    impl RngCore for ConstantRng {
        fn next_u32(&mut self) -> u32 {
            u32::from_ne_bytes([self.0; 4])
        }
        fn next_u64(&mut self) -> u64 {
            u64::from_ne_bytes([self.0; 8])
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
            dest.fill(self.0);
            Ok(())
        }
    }
    impl CryptoRng for ConstantRng {}

    #[test]
    fn derives_nip06_public_key() {
        assert_eq!(get_public_key_hex(SK_HEX).unwrap(), PK_HEX);
    }

    #[test]
    fn generated_keys_are_valid_scalars() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..16 {
            let sk = generate_private_key_with(&mut rng).unwrap();
            assert!(SecretKey::from_slice(&sk).is_ok());
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = generate_private_key_with(&mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        let b = generate_private_key_with(&mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn os_rng_private_keys_are_valid_and_distinct() {
        let a = generate_private_key().unwrap();
        let b = generate_private_key().unwrap();
        assert!(SecretKey::from_slice(&a).is_ok());
        assert!(SecretKey::from_slice(&b).is_ok());
        assert_ne!(a, b);
    }

    #[test]
    fn os_rng_generation_works() {
        let kp = Keypair::generate().unwrap();
        assert!(is_valid_public_key_hex(&kp.public_key_hex()));
        assert_eq!(kp.public_key, derive_public_key(&kp.secret_key).unwrap());
    }

    #[test]
    fn random_source_failure_propagates() {
        assert!(matches!(
            generate_private_key_with(&mut BrokenRng),
            Err(Nip19Error::RandomSourceFailure(_))
        ));
    }

    #[test]
    fn out_of_range_draws_are_rejected_not_reduced() {
        // 0x00.. is zero and 0xff.. exceeds the order; neither may be accepted.
        for byte in [0x00, 0xff] {
            assert!(matches!(
                generate_private_key_with(&mut ConstantRng(byte)),
                Err(Nip19Error::RandomSourceFailure(_))
            ));
        }
        assert_eq!(
            generate_private_key_with(&mut ConstantRng(0x01)).unwrap(),
            [0x01; 32]
        );
    }

    #[test]
    fn rejects_invalid_secret_keys() {
        assert!(matches!(
            derive_public_key(&[0u8; 32]),
            Err(Nip19Error::InvalidSecretKey(_))
        ));
        assert!(matches!(
            get_public_key_hex("abcd"),
            Err(Nip19Error::InvalidLength { expected: 32, got: 2 })
        ));
    }

    #[test]
    fn public_key_hex_validation() {
        assert!(is_valid_public_key_hex(PK_HEX));
        assert!(!is_valid_public_key_hex(&PK_HEX.to_uppercase()));
        assert!(!is_valid_public_key_hex(&PK_HEX[..62]));
        assert!(!is_valid_public_key_hex(&format!("{PK_HEX}00")));
        assert!(!is_valid_public_key_hex(&PK_HEX.replace('7', "g")));
    }

    #[test]
    fn keypair_debug_hides_secret() {
        let kp = Keypair::from_secret_key(&hex_to_32(SK_HEX).unwrap()).unwrap();
        let rendered = format!("{kp:?}");
        assert!(rendered.contains(PK_HEX));
        assert!(!rendered.contains(SK_HEX));
    }

    #[test]
    fn keypair_bech32_forms() {
        let kp = Keypair::from_secret_key(&hex_to_32(SK_HEX).unwrap()).unwrap();
        assert_eq!(
            kp.nsec().unwrap(),
            "nsec10allq0gjx7fddtzef0ax00mdps9t2kmtrldkyjfs8l5xruwvh2dq0lhhkp"
        );
        assert_eq!(
            kp.npub().unwrap(),
            "npub1zutzeysacnf9rru6zqwmxd54mud0k44tst6l70ja5mhv8jjumytsd2x7nu"
        );
    }
}
