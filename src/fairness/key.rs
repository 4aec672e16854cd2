//! Secret key and published digest.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::FairnessError;

/// Key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Digest length in bytes (HMAC-SHA-256 output).
pub const DIGEST_LEN: usize = 32;

fn decode_fixed<const N: usize>(text: &str) -> Result<[u8; N], FairnessError> {
    let bytes = hex::decode(text.trim()).map_err(|e| FairnessError::KeyNotHex(e.to_string()))?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| FairnessError::KeyLength { expected: N, actual })
}

/// Per-round secret key.
///
/// Freshly sampled for every round and kept private until the outcome has
/// been shown. `Debug` does not print the bytes, so the key cannot leak
/// through log output before disclosure.
#[derive(Clone, PartialEq, Eq)]
pub struct HmacKey([u8; KEY_LEN]);

impl HmacKey {
    /// Sample a new key.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        Self(rng.gen_bytes())
    }

    /// Wrap raw key bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a disclosed key (64 hex characters).
    pub fn from_hex(text: &str) -> Result<Self, FairnessError> {
        decode_fixed(text).map(Self)
    }

    /// Lowercase hexadecimal form, as printed after `HMAC key:`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HmacKey(..)")
    }
}

/// Published HMAC tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw tag bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a published digest.
    pub fn from_hex(text: &str) -> Result<Self, FairnessError> {
        decode_fixed(text).map(Self)
    }

    /// Lowercase hexadecimal form, as printed after `HMAC:`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw tag bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.to_hex()
    }
}

impl TryFrom<String> for Digest {
    type Error = FairnessError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_hex(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_fresh() {
        let mut rng = GameRng::from_entropy();
        let a = HmacKey::generate(&mut rng);
        let b = HmacKey::generate(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hex_form() {
        let key = HmacKey::from_bytes([0xab; KEY_LEN]);
        let text = key.to_hex();
        assert_eq!(text.len(), 2 * KEY_LEN);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(HmacKey::from_hex(&text).unwrap(), key);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(HmacKey::from_hex("zz"), Err(FairnessError::KeyNotHex(_))));
        assert_eq!(
            HmacKey::from_hex("abcd"),
            Err(FairnessError::KeyLength { expected: KEY_LEN, actual: 2 })
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let key = HmacKey::from_bytes([0x11; KEY_LEN]);
        assert_eq!(format!("{key:?}"), "HmacKey(..)");
    }

    #[test]
    fn test_digest_serde() {
        let digest = Digest::from_bytes([7; DIGEST_LEN]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "07".repeat(DIGEST_LEN)));
        assert_eq!(serde_json::from_str::<Digest>(&json).unwrap(), digest);
    }
}
