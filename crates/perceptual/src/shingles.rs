//! K-gram extraction and hashing.
//!
//! K-grams are borrowed slices of the sanitized text, one per character
//! offset. Each is reduced to a small integer with an additive hash: the sum
//! of its code points modulo [`MAX_HASH_VALUE`]. The hash is intentionally
//! weak; anchor selection relies on positions, not hash strength. Changing it
//! invalidates every stored fingerprint.

use serde::{Deserialize, Serialize};

use crate::config::WinnowError;

/// Modulus of the additive k-gram hash.
pub const MAX_HASH_VALUE: u32 = 500;

/// Hash of one k-gram together with the k-gram's character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashToken {
    pub value: u32,
    pub position: usize,
}

/// Split `text` into overlapping k-grams of `threshold` characters.
///
/// Returns exactly `len - threshold + 1` slices, where `len` counts
/// characters, ordered by start offset. Index `i` starts at character `i`.
pub fn make_kgrams(text: &str, threshold: usize) -> Result<Vec<&str>, WinnowError> {
    if threshold == 0 {
        return Err(WinnowError::InvalidConfig {
            field: "threshold",
            value: threshold,
        });
    }

    // Byte offset of every character start, plus the end of the text.
    let mut bounds: Vec<usize> = Vec::with_capacity(text.len() + 1);
    bounds.extend(text.char_indices().map(|(idx, _)| idx));
    bounds.push(text.len());

    let len = bounds.len() - 1;
    if len < threshold {
        return Err(WinnowError::DocumentTooShort {
            length: len,
            required: threshold,
        });
    }

    let count = len - threshold + 1;
    let mut out = Vec::with_capacity(count);
    out.extend((0..count).map(|i| &text[bounds[i]..bounds[i + threshold]]));
    Ok(out)
}

/// Sum of the k-gram's code points modulo [`MAX_HASH_VALUE`].
#[inline]
pub fn additive_hash(kgram: &str) -> u32 {
    let sum: u64 = kgram.chars().map(|c| u64::from(u32::from(c))).sum();
    // The remainder is below MAX_HASH_VALUE, so it fits in u32.
    (sum % u64::from(MAX_HASH_VALUE)) as u32
}

/// Hash every k-gram, keeping sequence order. Token `i` gets position `i`.
pub fn hash_kgrams<S: AsRef<str>>(kgrams: &[S]) -> Vec<HashToken> {
    let mut out = Vec::with_capacity(kgrams.len());
    out.extend(kgrams.iter().enumerate().map(|(position, kgram)| HashToken {
        value: additive_hash(kgram.as_ref()),
        position,
    }));
    out
}
