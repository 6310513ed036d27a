use canonical::CanonicalError;
use perceptual::WinnowError;
use thiserror::Error;

use crate::config::ConfigLoadError;

/// Errors surfaced by `generate` / `verify` on either strategy.
///
/// Every error aborts the current call; nothing is retried and no partial
/// fingerprint is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// A required option is absent after merging caller options over the
    /// stored defaults.
    #[error("missing configuration: {field}")]
    MissingConfiguration { field: &'static str },

    #[error("unsupported hashing algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("noise threshold {noise_threshold} cannot exceed threshold {threshold}")]
    InvalidThresholds {
        threshold: usize,
        noise_threshold: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No document was loaded, or the loaded document is empty.
    #[error("document content must be set; load it with from_text() or from_file()")]
    EmptyDocument,

    #[error("document too short: got {length}, need at least {required}")]
    DocumentTooShort { length: usize, required: usize },

    #[error("a candidate fingerprint must be provided")]
    MissingCandidate,

    #[error("failed to read document: {0}")]
    Io(String),

    #[error("fingerprint serialization failed: {0}")]
    Serialization(String),

    #[error("configuration file error: {0}")]
    Config(String),
}

impl From<WinnowError> for FingerprintError {
    fn from(err: WinnowError) -> Self {
        match err {
            WinnowError::MissingConfiguration { field } => {
                FingerprintError::MissingConfiguration { field }
            }
            WinnowError::InvalidConfig { .. } => {
                FingerprintError::InvalidConfiguration(err.to_string())
            }
            WinnowError::InvalidThresholds {
                threshold,
                noise_threshold,
            } => FingerprintError::InvalidThresholds {
                threshold,
                noise_threshold,
            },
            WinnowError::DocumentTooShort { length, required } => {
                FingerprintError::DocumentTooShort { length, required }
            }
            WinnowError::MalformedFingerprint(msg) => FingerprintError::Serialization(msg),
        }
    }
}

impl From<CanonicalError> for FingerprintError {
    fn from(err: CanonicalError) -> Self {
        match err {
            CanonicalError::UnsupportedAlgorithm(name) => {
                FingerprintError::UnsupportedAlgorithm(name)
            }
        }
    }
}

impl From<std::io::Error> for FingerprintError {
    fn from(err: std::io::Error) -> Self {
        FingerprintError::Io(err.to_string())
    }
}

impl From<ConfigLoadError> for FingerprintError {
    fn from(err: ConfigLoadError) -> Self {
        FingerprintError::Config(err.to_string())
    }
}
