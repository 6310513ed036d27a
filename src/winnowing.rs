//! Winnowing strategy.

pub use perceptual::{Fingerprint, WinnowArtifacts, WinnowConfig, WinnowOptions};

use crate::document::Document;
use crate::error::FingerprintError;
use crate::strategy::{Fingerprinter, instrumented};

/// Merge `opts` over `defaults` and validate the result.
///
/// Document-independent: bad thresholds fail here before any document is
/// looked at.
pub fn resolve_winnow_config(
    defaults: &WinnowOptions,
    opts: Option<&WinnowOptions>,
) -> Result<WinnowConfig, FingerprintError> {
    let merged = match opts {
        Some(overrides) => defaults.merge(overrides),
        None => *defaults,
    };
    let cfg = merged.resolve()?;
    cfg.validate()?;
    Ok(cfg)
}

/// Winnow the sanitized text of `document`.
pub fn winnow_document(
    document: &Document,
    cfg: &WinnowConfig,
) -> Result<Fingerprint, FingerprintError> {
    Ok(winnow_document_artifacts(document, cfg)?.fingerprint)
}

/// Winnow the sanitized text of `document`, keeping every stage output.
pub fn winnow_document_artifacts(
    document: &Document,
    cfg: &WinnowConfig,
) -> Result<WinnowArtifacts, FingerprintError> {
    if document.sanitized().is_empty() {
        return Err(FingerprintError::EmptyDocument);
    }
    Ok(perceptual::winnow_artifacts(document.sanitized(), cfg)?)
}

/// Winnowing generator.
///
/// Options passed to `generate`/`verify` are merged field by field over the
/// stored defaults (`threshold = 10`, `noise_threshold = 5` unless replaced
/// with [`with_defaults`](Self::with_defaults)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnowFingerprint {
    document: Option<Document>,
    defaults: WinnowOptions,
}

impl WinnowFingerprint {
    pub fn new() -> Self {
        Self {
            document: None,
            defaults: WinnowOptions::standard(),
        }
    }

    /// Replace the stored defaults. Partial defaults are allowed; anything
    /// still missing at `generate` time is `MissingConfiguration`.
    pub fn with_defaults(mut self, defaults: WinnowOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &WinnowOptions {
        &self.defaults
    }

    /// Resolve per-call options against the stored defaults.
    pub fn config(&self, opts: Option<&WinnowOptions>) -> Result<WinnowConfig, FingerprintError> {
        resolve_winnow_config(&self.defaults, opts)
    }

    /// Typed fingerprint of the loaded document.
    pub fn fingerprint(&self, opts: Option<&WinnowOptions>) -> Result<Fingerprint, FingerprintError> {
        Ok(self.artifacts(opts)?.fingerprint)
    }

    /// Every stage output for the loaded document.
    pub fn artifacts(
        &self,
        opts: Option<&WinnowOptions>,
    ) -> Result<WinnowArtifacts, FingerprintError> {
        let cfg = self.config(opts)?;
        let document = self.loaded()?;
        instrumented("generate", "winnow", document, || {
            winnow_document_artifacts(document, &cfg)
        })
    }

    fn loaded(&self) -> Result<&Document, FingerprintError> {
        match &self.document {
            Some(doc) if !doc.sanitized().is_empty() => Ok(doc),
            _ => Err(FingerprintError::EmptyDocument),
        }
    }
}

impl Default for WinnowFingerprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Fingerprinter for WinnowFingerprint {
    type Options = WinnowOptions;

    fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    fn generate(&self, opts: Option<&WinnowOptions>) -> Result<String, FingerprintError> {
        Ok(self.fingerprint(opts)?.to_json()?)
    }

    fn verify(
        &self,
        candidate: &str,
        opts: Option<&WinnowOptions>,
    ) -> Result<bool, FingerprintError> {
        let document = self.loaded()?;
        if candidate.is_empty() {
            return Err(FingerprintError::MissingCandidate);
        }
        let cfg = self.config(opts)?;
        instrumented("verify", "winnow", document, || {
            let generated = winnow_document(document, &cfg)?.to_json()?;
            Ok(generated == candidate)
        })
    }
}
