use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use nostr_identity_utility::Keypair;

use crate::types::KeyRecord;

pub fn generate(count: u32) -> Result<Vec<KeyRecord>> {
    let mut out: Vec<KeyRecord> = Vec::with_capacity(count as usize);

    for i in 0..count {
        let kp = Keypair::generate().with_context(|| format!("generating keypair #{i}"))?;
        out.push(KeyRecord {
            private_key_hex: kp.secret_key_hex(),
            public_key_hex: kp.public_key_hex(),
            nsec: kp.nsec()?,
            npub: kp.npub()?,
        });
    }

    tracing::debug!(count, "generated keypairs");
    Ok(out)
}

pub fn emit(records: Vec<KeyRecord>, out: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(&records)?;
    if let Some(p) = out {
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&p, json).with_context(|| format!("writing {}", p.display()))?;
        println!("✓ Wrote {}", p.display());
    } else {
        println!("{json}");
    }
    Ok(())
}
