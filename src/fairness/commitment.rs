//! HMAC-SHA-256 commit-reveal.
//!
//! The computer's move is bound to a digest before the human answers:
//!
//! 1. `Commitment::seal(key, move)` computes the digest; only the digest
//!    is published.
//! 2. The human picks a move and the outcome is shown.
//! 3. `Commitment::reveal` hands back the key. Anyone can now run
//!    `verify(key, move, digest)` to check that the announced computer
//!    move is the one that was sealed.
//!
//! The MAC is keyed with the key's lowercase hex text rather than the raw
//! bytes, so the printed `HMAC key:` line can be pasted directly into any
//! HMAC-SHA-256 calculator together with the move name.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::error::FairnessError;

use super::key::{Digest, HmacKey, DIGEST_LEN};

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(key: &HmacKey, move_name: &str) -> Result<HmacSha256, FairnessError> {
    let mut mac =
        HmacSha256::new_from_slice(key.to_hex().as_bytes()).map_err(|_| FairnessError::MacInit)?;
    mac.update(move_name.as_bytes());
    Ok(mac)
}

/// Digest of `move_name` under `key`.
///
/// Deterministic: the same key and move always give the same digest.
pub fn commit(key: &HmacKey, move_name: &str) -> Result<Digest, FairnessError> {
    let tag = keyed_mac(key, move_name)?.finalize().into_bytes();
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&tag);
    Ok(Digest::from_bytes(bytes))
}

/// Check a disclosed key and move against a previously published digest.
///
/// Comparison is constant-time.
#[must_use]
pub fn verify(key: &HmacKey, move_name: &str, digest: &Digest) -> bool {
    match keyed_mac(key, move_name) {
        Ok(mac) => mac.verify_slice(digest.as_bytes()).is_ok(),
        Err(_) => false,
    }
}

/// A sealed move: the digest is public, the key stays private until
/// `reveal` consumes the commitment.
#[derive(Debug)]
pub struct Commitment {
    key: HmacKey,
    digest: Digest,
}

impl Commitment {
    /// Bind `move_name` to `key`.
    pub fn seal(key: HmacKey, move_name: &str) -> Result<Self, FairnessError> {
        let digest = commit(&key, move_name)?;
        debug!(%digest, "sealed commitment");
        Ok(Self { key, digest })
    }

    /// The digest to publish before the human moves.
    #[must_use]
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Disclose the key. The commitment is spent afterwards.
    #[must_use]
    pub fn reveal(self) -> HmacKey {
        debug!(digest = %self.digest, "revealing commitment key");
        self.key
    }
}
