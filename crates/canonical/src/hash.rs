//! Whole-document digests.
//!
//! The digest strategy hashes the raw loaded text as-is (no sanitization)
//! and returns a lowercase hex string. Three algorithms are recognized:
//!
//! | Algorithm | Crate  | Hex length |
//! |-----------|--------|------------|
//! | MD5       | `md-5` | 32         |
//! | SHA-1     | `sha1` | 40         |
//! | SHA-256   | `sha2` | 64         |
//!
//! # Examples
//!
//! ```rust
//! use canonical::{digest_hex, DigestAlgorithm};
//!
//! let hex = digest_hex(DigestAlgorithm::Sha256, b"hello");
//! assert_eq!(
//!     hex,
//!     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::CanonicalError;

/// Digest algorithms supported by the whole-document strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    #[serde(alias = "sha-1")]
    Sha1,
    #[default]
    #[serde(alias = "sha-256")]
    Sha256,
}

impl DigestAlgorithm {
    /// All recognized algorithms, in declaration order.
    pub const ALL: [DigestAlgorithm; 3] = [Self::Md5, Self::Sha1, Self::Sha256];

    /// Lowercase identifier used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// Length of the hex digest this algorithm produces.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CanonicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(CanonicalError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Hash `bytes` with `algorithm` and return the lowercase hex digest.
pub fn digest_hex(algorithm: DigestAlgorithm, bytes: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Md5 => hex::encode(Md5::digest(bytes)),
        DigestAlgorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
        DigestAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(bytes);
            hex::encode(hasher.finalize())
        }
    }
}
