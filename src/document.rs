//! Loaded documents.

use std::fs;
use std::path::Path;

use canonical::sanitize;
use serde::{Deserialize, Serialize};

use crate::error::FingerprintError;

/// Raw document text together with its sanitized form.
///
/// Built once per load and never mutated; loading another document means
/// building another `Document`. Deserializing reads only `raw` and sanitizes
/// it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredDocument")]
pub struct Document {
    raw: String,
    sanitized: String,
}

#[derive(Deserialize)]
struct StoredDocument {
    raw: String,
}

impl From<StoredDocument> for Document {
    fn from(stored: StoredDocument) -> Self {
        Document::from_text(stored.raw)
    }
}

impl Document {
    /// Build a document from in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let raw = text.into();
        let sanitized = sanitize(&raw);
        Self { raw, sanitized }
    }

    /// Read a whole UTF-8 file into a document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FingerprintError> {
        let raw = fs::read_to_string(path)?;
        Ok(Self::from_text(raw))
    }

    /// Text exactly as loaded. The digest strategy hashes this.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Sanitized text. Winnowing positions index into this.
    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// Sanitized length in characters.
    pub fn sanitized_len(&self) -> usize {
        self.sanitized.chars().count()
    }
}
