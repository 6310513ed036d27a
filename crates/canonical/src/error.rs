use thiserror::Error;

/// Errors raised by the canonical layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("unsupported digest algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}
