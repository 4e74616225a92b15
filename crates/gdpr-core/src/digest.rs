//! # Content Digest — Document Checksums
//!
//! Uploaded compliance documents (DPIAs, subject-rights procedures,
//! processor contracts) are identified by a checksum of their bytes,
//! computed once when the document is created. Two uploads with the same
//! checksum are the same document.
//!
//! Digests serialize as `sha256:<64 lowercase hex chars>`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::RegistryError;

/// The hash algorithm used to produce a content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content digest with its algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a new content digest from raw bytes and algorithm.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse the `sha256:<hex>` form produced by `Display`.
    pub fn parse(s: &str) -> Result<Self, RegistryError> {
        let invalid = |reason: &str| RegistryError::InvalidIdentifier {
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let hex = s
            .strip_prefix("sha256:")
            .ok_or_else(|| invalid("expected sha256: prefix"))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("non-hex character"));
        }
        if hex.len() != 64 {
            return Err(invalid("expected 64 hex characters"));
        }
        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks(2)) {
            *byte = (nibble(pair[0]) << 4) | nibble(pair[1]);
        }
        Ok(Self::new(DigestAlgorithm::Sha256, bytes))
    }
}

/// Value of an ASCII hex digit. Callers check `is_ascii_hexdigit` first.
fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl TryFrom<String> for ContentDigest {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContentDigest> for String {
    fn from(value: ContentDigest) -> Self {
        value.to_string()
    }
}

/// Compute the SHA-256 checksum of a document's raw bytes.
pub fn sha256_digest(data: &[u8]) -> ContentDigest {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_sha256_vector() {
        assert_eq!(
            sha256_digest(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_display_has_algorithm_prefix() {
        let s = sha256_digest(b"%PDF-1.4").to_string();
        assert!(s.starts_with("sha256:"));
        assert_eq!(s.len(), 7 + 64);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(ContentDigest::parse("md5:abcd").is_err());
        assert!(ContentDigest::parse("sha256:abcd").is_err());
        let bad = format!("sha256:{}", "zz".repeat(32));
        assert!(ContentDigest::parse(&bad).is_err());
        let signed = format!("sha256:+f{}", "00".repeat(31));
        assert!(ContentDigest::parse(&signed).is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte_without_panicking() {
        // 64 bytes long, but "é" spans two of them.
        let s = format!("sha256:a\u{e9}{}", "a".repeat(61));
        assert!(ContentDigest::parse(&s).is_err());
        let from_snapshot: Result<ContentDigest, _> =
            serde_json::from_str(&format!("\"{s}\""));
        assert!(from_snapshot.is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let digest = sha256_digest(b"contract");
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{digest}\""));
        let back: ContentDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }

    proptest! {
        #[test]
        fn prop_display_parse_identity(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let digest = sha256_digest(&data);
            prop_assert_eq!(ContentDigest::parse(&digest.to_string()).unwrap(), digest);
        }
    }
}
