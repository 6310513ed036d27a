//! Fingerprint types and the serialized format.
//!
//! A fingerprint serializes as a bare JSON array of `[hash, position]` pairs
//! in increasing position order, e.g. `[[294,2],[294,3]]`. There is no
//! envelope: no document id and no configuration echo. The format is part of
//! the public contract, so two fingerprints are compared as strings.

use serde::{Deserialize, Serialize};

use crate::config::{WinnowConfig, WinnowError};
use crate::shingles::HashToken;
use crate::window::Selection;

/// One selected `(hash, position)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, usize)", into = "(u32, usize)")]
pub struct Anchor {
    /// Additive k-gram hash.
    pub hash: u32,
    /// Character offset of the k-gram in the sanitized text.
    pub position: usize,
}

impl From<(u32, usize)> for Anchor {
    fn from((hash, position): (u32, usize)) -> Self {
        Self { hash, position }
    }
}

impl From<Anchor> for (u32, usize) {
    fn from(anchor: Anchor) -> Self {
        (anchor.hash, anchor.position)
    }
}

/// Ordered, deduplicated anchors for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Anchor>", into = "Vec<Anchor>")]
pub struct Fingerprint {
    anchors: Vec<Anchor>,
}

impl Fingerprint {
    /// Build a fingerprint from anchors, rejecting any sequence whose
    /// positions are not strictly increasing.
    pub fn from_anchors(anchors: Vec<Anchor>) -> Result<Self, WinnowError> {
        if let Some(pair) = anchors.windows(2).find(|w| w[0].position >= w[1].position) {
            return Err(WinnowError::MalformedFingerprint(format!(
                "positions must increase, found {} followed by {}",
                pair[0].position, pair[1].position
            )));
        }
        Ok(Self { anchors })
    }

    pub(crate) fn from_sorted(anchors: Vec<Anchor>) -> Self {
        Self { anchors }
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.anchors.iter().map(|a| a.position)
    }

    pub fn into_anchors(self) -> Vec<Anchor> {
        self.anchors
    }

    /// Serialize to the `[[hash,position],...]` wire format.
    pub fn to_json(&self) -> Result<String, WinnowError> {
        serde_json::to_string(self).map_err(|e| WinnowError::MalformedFingerprint(e.to_string()))
    }

    /// Parse the `[[hash,position],...]` wire format.
    pub fn from_json(json: &str) -> Result<Self, WinnowError> {
        serde_json::from_str(json).map_err(|e| WinnowError::MalformedFingerprint(e.to_string()))
    }
}

impl TryFrom<Vec<Anchor>> for Fingerprint {
    type Error = WinnowError;

    fn try_from(anchors: Vec<Anchor>) -> Result<Self, Self::Error> {
        Self::from_anchors(anchors)
    }
}

impl From<Fingerprint> for Vec<Anchor> {
    fn from(fp: Fingerprint) -> Self {
        fp.anchors
    }
}

/// Every stage output of one winnowing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnowArtifacts {
    /// Configuration the run used.
    pub config: WinnowConfig,
    /// Hash of every k-gram, in offset order.
    pub hashes: Vec<HashToken>,
    /// One selection per window, before deduplication.
    pub selections: Vec<Selection>,
    /// Deduplicated anchors.
    pub fingerprint: Fingerprint,
}

impl WinnowArtifacts {
    /// Number of k-grams, which equals the number of hash tokens.
    pub fn kgram_count(&self) -> usize {
        self.hashes.len()
    }

    /// Number of windows, which equals the number of selections.
    pub fn window_count(&self) -> usize {
        self.selections.len()
    }
}
