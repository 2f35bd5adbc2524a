use anyhow::{Context, Result};

use nostr_identity_utility::crypto::nostr_utils::secret_key_from_input;
use nostr_identity_utility::Keypair;

use crate::types::PublicKeyOut;

pub fn run(secret: &str) -> Result<PublicKeyOut> {
    let sk = secret_key_from_input(secret).context("parsing secret key")?;
    let kp = Keypair::from_secret_key(&sk).context("deriving public key")?;
    Ok(PublicKeyOut {
        public_key_hex: kp.public_key_hex(),
        npub: kp.npub()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_nsec() {
        let out = run("nsec10allq0gjx7fddtzef0ax00mdps9t2kmtrldkyjfs8l5xruwvh2dq0lhhkp").unwrap();
        assert_eq!(
            out.public_key_hex,
            "17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917"
        );
        assert_eq!(
            out.npub,
            "npub1zutzeysacnf9rru6zqwmxd54mud0k44tst6l70ja5mhv8jjumytsd2x7nu"
        );
    }

    #[test]
    fn zero_key_is_rejected() {
        assert!(run(&"00".repeat(32)).is_err());
    }
}
