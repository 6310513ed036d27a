//! Whole-document digest strategy.

use canonical::{DigestAlgorithm, digest_hex};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::FingerprintError;
use crate::strategy::{Fingerprinter, instrumented};

/// Options for the digest strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<DigestAlgorithm>,
}

impl DigestOptions {
    /// Options with no algorithm chosen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Choose the algorithm by name (`md5`, `sha1`, `sha256`).
    pub fn with_algorithm_name(self, name: &str) -> Result<Self, FingerprintError> {
        Ok(self.with_algorithm(name.parse()?))
    }

    /// The chosen algorithm, or `MissingConfiguration`.
    pub fn require(&self) -> Result<DigestAlgorithm, FingerprintError> {
        self.algorithm
            .ok_or(FingerprintError::MissingConfiguration { field: "algorithm" })
    }
}

impl From<DigestAlgorithm> for DigestOptions {
    fn from(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm: Some(algorithm),
        }
    }
}

/// Hex digest of the raw, unsanitized document text.
pub fn digest_document(
    document: &Document,
    algorithm: DigestAlgorithm,
) -> Result<String, FingerprintError> {
    if document.raw().is_empty() {
        return Err(FingerprintError::EmptyDocument);
    }
    Ok(digest_hex(algorithm, document.raw().as_bytes()))
}

/// Digest generator.
///
/// Options passed to `generate`/`verify` replace the stored defaults
/// wholesale, so options without an algorithm fail with
/// `MissingConfiguration` even though the defaults name one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFingerprint {
    document: Option<Document>,
    defaults: DigestOptions,
}

impl HashFingerprint {
    /// Generator defaulting to SHA-256.
    pub fn new() -> Self {
        Self {
            document: None,
            defaults: DigestOptions::from(DigestAlgorithm::default()),
        }
    }

    /// Generator with explicit default options. The options must name an
    /// algorithm.
    pub fn with_options(defaults: DigestOptions) -> Result<Self, FingerprintError> {
        defaults.require()?;
        Ok(Self {
            document: None,
            defaults,
        })
    }

    pub fn defaults(&self) -> &DigestOptions {
        &self.defaults
    }

    fn loaded(&self) -> Result<&Document, FingerprintError> {
        self.document.as_ref().ok_or(FingerprintError::EmptyDocument)
    }
}

impl Default for HashFingerprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Fingerprinter for HashFingerprint {
    type Options = DigestOptions;

    fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    fn generate(&self, opts: Option<&DigestOptions>) -> Result<String, FingerprintError> {
        let algorithm = opts.unwrap_or(&self.defaults).require()?;
        let document = self.loaded()?;
        instrumented("generate", "digest", document, || {
            digest_document(document, algorithm)
        })
    }

    fn verify(
        &self,
        candidate: &str,
        opts: Option<&DigestOptions>,
    ) -> Result<bool, FingerprintError> {
        let algorithm = opts.unwrap_or(&self.defaults).require()?;
        let document = self.loaded()?;
        if candidate.is_empty() {
            return Err(FingerprintError::MissingCandidate);
        }
        instrumented("verify", "digest", document, || {
            Ok(digest_document(document, algorithm)? == candidate)
        })
    }
}
