//! Document fingerprinting for plagiarism detection.
//!
//! Two strategies share one interface, [`Fingerprinter`]:
//!
//! - [`HashFingerprint`]: a whole-document MD5 / SHA-1 / SHA-256 digest of
//!   the raw text. Any byte change yields a different fingerprint.
//! - [`WinnowFingerprint`]: a Winnowing fingerprint of the sanitized text,
//!   serialized as `[[hash,position],...]`. Local edits only disturb the
//!   anchors near them.
//!
//! The stage crates do the work: `canonical` sanitizes and digests,
//! `perceptual` runs the k-gram / hash / window / assemble pipeline. This
//! crate loads documents, merges options, maps errors and logs.
//!
//! ```
//! use docprint::{Fingerprinter, WinnowFingerprint, WinnowOptions};
//!
//! let fp = WinnowFingerprint::new().from_text("ABC abc, ABC!");
//! let opts = WinnowOptions::new().with_threshold(3).with_noise_threshold(1);
//! let generated = fp.generate(Some(&opts)).unwrap();
//!
//! assert_eq!(generated, "[[294,2],[294,3],[294,4],[294,5],[294,6]]");
//! assert!(fp.verify(&generated, Some(&opts)).unwrap());
//! ```

pub mod config;
pub mod digest;
pub mod document;
pub mod error;
pub mod strategy;
pub mod winnowing;

use std::path::Path;

pub use canonical::{CanonicalError, DigestAlgorithm, digest_hex, is_stripped, sanitize};
pub use perceptual::{
    Anchor, DEFAULT_NOISE_THRESHOLD, DEFAULT_THRESHOLD, Fingerprint, HashToken, MAX_HASH_VALUE,
    Selection, WinnowArtifacts, WinnowConfig, WinnowError, WinnowOptions, additive_hash, assemble,
    hash_kgrams, make_kgrams, select_minima, winnow, winnow_artifacts,
};

pub use crate::config::{ConfigLoadError, DocprintConfig, StrategyKind};
pub use crate::digest::{DigestOptions, HashFingerprint, digest_document};
pub use crate::document::Document;
pub use crate::error::FingerprintError;
pub use crate::strategy::{Fingerprinter, StrategyConfig, fingerprint_document, verify_document};
pub use crate::winnowing::{WinnowFingerprint, resolve_winnow_config, winnow_document};

/// Fingerprint a file with the strategy a YAML configuration file selects.
pub fn fingerprint_file_with_config(
    document_path: impl AsRef<Path>,
    config_path: impl AsRef<Path>,
) -> Result<String, FingerprintError> {
    let config = DocprintConfig::from_file(config_path)?;
    let document = Document::from_file(document_path)?;
    fingerprint_document(&document, &config.strategy_config()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn fingerprint_file_with_digest_config() {
        let doc = write_temp("hello");
        let cfg = write_temp("version: \"1.0\"\nstrategy: digest\ndigest:\n  algorithm: md5\n");
        assert_eq!(
            fingerprint_file_with_config(doc.path(), cfg.path()).unwrap(),
            "5d41402abc4b2a76b9719d911017c592"
        );
    }

    #[test]
    fn fingerprint_file_with_winnow_config() {
        let doc = write_temp("ABC abc, ABC!");
        let cfg = write_temp("version: \"1\"\nwinnow:\n  threshold: 3\n  noise_threshold: 1\n");
        assert_eq!(
            fingerprint_file_with_config(doc.path(), cfg.path()).unwrap(),
            "[[294,2],[294,3],[294,4],[294,5],[294,6]]"
        );
    }

    #[test]
    fn bad_config_file_is_config_error() {
        let doc = write_temp("hello");
        let cfg = write_temp("version: \"3\"\n");
        assert!(matches!(
            fingerprint_file_with_config(doc.path(), cfg.path()),
            Err(FingerprintError::Config(msg)) if msg.contains("version")
        ));
    }
}
