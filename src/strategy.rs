//! The capability interface shared by both fingerprinting strategies.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{Level, info, warn};

use crate::digest::{DigestOptions, digest_document};
use crate::document::Document;
use crate::error::FingerprintError;
use crate::winnowing::{WinnowOptions, resolve_winnow_config, winnow_document};

/// Load a document, produce a fingerprint string, check a candidate string.
///
/// `generate` and `verify` take `&self` and touch no shared state, so one
/// generator can serve many threads. Loading a document consumes the
/// generator and hands back a new one.
pub trait Fingerprinter: Sized {
    /// Per-call options, merged with or replacing the stored defaults.
    type Options;

    /// Replace the loaded document.
    fn with_document(self, document: Document) -> Self;

    /// The loaded document, if any.
    fn document(&self) -> Option<&Document>;

    fn from_text(self, text: impl Into<String>) -> Self {
        self.with_document(Document::from_text(text))
    }

    fn from_file(self, path: impl AsRef<Path>) -> Result<Self, FingerprintError> {
        Ok(self.with_document(Document::from_file(path)?))
    }

    /// Fingerprint the loaded document.
    fn generate(&self, opts: Option<&Self::Options>) -> Result<String, FingerprintError>;

    /// Regenerate and compare with `candidate` by exact string equality.
    fn verify(&self, candidate: &str, opts: Option<&Self::Options>)
    -> Result<bool, FingerprintError>;
}

/// Strategy selection by configuration shape.
///
/// Deserializes from `{"strategy": "digest", "algorithm": "sha1"}` or
/// `{"strategy": "winnow", "threshold": 8, "noise_threshold": 4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyConfig {
    Digest(DigestOptions),
    Winnow(WinnowOptions),
}

impl StrategyConfig {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyConfig::Digest(_) => "digest",
            StrategyConfig::Winnow(_) => "winnow",
        }
    }
}

/// Fingerprint `document` with the strategy `cfg` selects.
///
/// Winnow options are merged over the standard defaults
/// (`threshold = 10`, `noise_threshold = 5`); digest options must name an
/// algorithm.
pub fn fingerprint_document(
    document: &Document,
    cfg: &StrategyConfig,
) -> Result<String, FingerprintError> {
    instrumented("generate", cfg.name(), document, || match cfg {
        StrategyConfig::Digest(opts) => digest_document(document, opts.require()?),
        StrategyConfig::Winnow(opts) => {
            let resolved = resolve_winnow_config(&WinnowOptions::standard(), Some(opts))?;
            Ok(winnow_document(document, &resolved)?.to_json()?)
        }
    })
}

/// Check `candidate` against `document` under the strategy `cfg` selects.
///
/// The document is checked before the candidate, as the generators do.
pub fn verify_document(
    document: &Document,
    candidate: &str,
    cfg: &StrategyConfig,
) -> Result<bool, FingerprintError> {
    let content = match cfg {
        StrategyConfig::Digest(_) => document.raw(),
        StrategyConfig::Winnow(_) => document.sanitized(),
    };
    if content.is_empty() {
        return Err(FingerprintError::EmptyDocument);
    }
    if candidate.is_empty() {
        return Err(FingerprintError::MissingCandidate);
    }
    Ok(fingerprint_document(document, cfg)? == candidate)
}

/// Run `f` inside an INFO span and log its outcome.
pub(crate) fn instrumented<T>(
    operation: &'static str,
    strategy: &'static str,
    document: &Document,
    f: impl FnOnce() -> Result<T, FingerprintError>,
) -> Result<T, FingerprintError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "docprint.fingerprint",
        operation,
        strategy,
        raw_len = document.raw().len(),
    );
    let _guard = span.enter();

    let result = f();
    let elapsed_micros = start.elapsed().as_micros();
    match &result {
        Ok(_) => info!(elapsed_micros, "fingerprint_success"),
        Err(err) => warn!(error = %err, elapsed_micros, "fingerprint_failure"),
    }
    result
}
