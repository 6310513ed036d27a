//! # docprint winnowing fingerprints
//!
//! This crate turns sanitized text into a Winnowing fingerprint: a short,
//! ordered list of `(hash, position)` anchors that survives local edits
//! elsewhere in the document.
//!
//! ## Contract
//!
//! - Input is text already passed through `canonical::sanitize`. This crate
//!   never normalizes or lowercases on its own.
//! - Every function is pure in `(text, config)`: no I/O, no clocks, no global
//!   state. Same input and config, same fingerprint, bit for bit.
//!
//! ## Pipeline
//!
//! 1.  **K-grams**: every substring of `threshold` characters, one per
//!     character offset ([`make_kgrams`]).
//! 2.  **Hashing**: each k-gram is reduced to
//!     `sum(code points) mod 500` ([`additive_hash`], [`hash_kgrams`]).
//! 3.  **Window minima**: a window of `window_size = threshold -
//!     noise_threshold + 1` hashes slides one step at a time; each window
//!     contributes its minimum, rightmost on ties ([`select_minima`]).
//! 4.  **Assembly**: consecutive windows that picked the same position
//!     collapse into one anchor ([`assemble`]).
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{winnow, WinnowConfig};
//!
//! let cfg = WinnowConfig::new(3, 1);
//! let fingerprint = winnow("abcabcabc", &cfg).unwrap();
//!
//! assert_eq!(
//!     fingerprint.to_json().unwrap(),
//!     "[[294,2],[294,3],[294,4],[294,5],[294,6]]"
//! );
//! ```
pub mod config;
pub mod fingerprint;
mod shingles;
mod window;

use std::time::Instant;

use tracing::debug;

pub use crate::config::{
    WinnowConfig, WinnowError, WinnowOptions, DEFAULT_NOISE_THRESHOLD, DEFAULT_THRESHOLD,
};
pub use crate::fingerprint::{Anchor, Fingerprint, WinnowArtifacts};
pub use crate::shingles::{additive_hash, hash_kgrams, make_kgrams, HashToken, MAX_HASH_VALUE};
pub use crate::window::{assemble, select_minima, Selection};

/// Compute the winnowing fingerprint of sanitized `text`.
pub fn winnow(text: &str, cfg: &WinnowConfig) -> Result<Fingerprint, WinnowError> {
    winnow_artifacts(text, cfg).map(|artifacts| artifacts.fingerprint)
}

/// Run the full pipeline and keep every intermediate stage output.
pub fn winnow_artifacts(text: &str, cfg: &WinnowConfig) -> Result<WinnowArtifacts, WinnowError> {
    let start = Instant::now();

    // --- Configuration validation ---
    cfg.validate()?;
    cfg.check_length(text.chars().count())?;

    // --- Pipeline ---
    let kgrams = make_kgrams(text, cfg.threshold)?;
    let hashes = hash_kgrams(&kgrams);
    let selections = select_minima(&hashes, cfg.window_size())?;
    let fingerprint = assemble(&selections);

    debug!(
        threshold = cfg.threshold,
        window_size = cfg.window_size(),
        kgrams = kgrams.len(),
        selections = selections.len(),
        anchors = fingerprint.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "winnow"
    );

    Ok(WinnowArtifacts {
        config: *cfg,
        hashes,
        selections,
        fingerprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn repeating_text_fingerprint() {
        let artifacts = winnow_artifacts("abcabcabc", &WinnowConfig::new(3, 1)).unwrap();
        assert_eq!(artifacts.kgram_count(), 7);
        assert!(artifacts.hashes.iter().all(|h| h.value == 294));
        assert_eq!(artifacts.window_count(), 5);
        assert_eq!(
            artifacts.fingerprint.to_json().unwrap(),
            "[[294,2],[294,3],[294,4],[294,5],[294,6]]"
        );
    }

    #[test]
    fn text_shorter_than_threshold() {
        assert_eq!(
            winnow("abcd", &WinnowConfig::default()),
            Err(WinnowError::DocumentTooShort {
                length: 4,
                required: 10
            })
        );
    }

    #[test]
    fn length_equal_to_threshold_needs_window_of_one() {
        // One k-gram, window of 6: the window stage cannot fill.
        assert_eq!(
            winnow("abcdefghij", &WinnowConfig::default()),
            Err(WinnowError::DocumentTooShort {
                length: 1,
                required: 6
            })
        );
        // noise == threshold gives a window of one.
        let fp = winnow("abcdefghij", &WinnowConfig::new(10, 10)).unwrap();
        assert_eq!(fp.to_json().unwrap(), "[[15,0]]");
    }

    #[test]
    fn invalid_thresholds_checked_before_length() {
        assert!(matches!(
            winnow("", &WinnowConfig::new(2, 3)),
            Err(WinnowError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn winnow_is_deterministic() {
        let text = "itwasthebestoftimesitwastheworstoftimes";
        let cfg = WinnowConfig::new(5, 3);
        assert_eq!(winnow(text, &cfg), winnow(text, &cfg));
    }

    #[test]
    fn shared_substring_shares_an_anchor_hash() {
        // 12 shared characters >= threshold + window_size - 1 = 4 + 3 - 1.
        let cfg = WinnowConfig::new(4, 2);
        let a = winnow("xxxxqwertyuiopasyyyy", &cfg).unwrap();
        let b = winnow("zzqwertyuiopaszz", &cfg).unwrap();
        let hashes_a: Vec<u32> = a.anchors().iter().map(|x| x.hash).collect();
        assert!(b.anchors().iter().any(|x| hashes_a.contains(&x.hash)));
    }

    proptest! {
        #[test]
        fn stage_sizes(text in "[a-e]{1,120}", threshold in 1usize..12, noise in 1usize..12) {
            let cfg = WinnowConfig::new(threshold, noise);
            prop_assume!(cfg.validate().is_ok());
            let len = text.chars().count();
            match winnow_artifacts(&text, &cfg) {
                Ok(a) => {
                    prop_assert_eq!(a.kgram_count(), len - threshold + 1);
                    prop_assert_eq!(a.window_count(), a.kgram_count() - cfg.window_size() + 1);
                    prop_assert!(a.fingerprint.len() <= a.window_count());
                    prop_assert!(a.fingerprint.positions().all(|p| p < a.kgram_count()));
                    let json = a.fingerprint.to_json().unwrap();
                    prop_assert_eq!(Fingerprint::from_json(&json).unwrap(), a.fingerprint);
                }
                Err(err) => {
                    let is_too_short = matches!(err, WinnowError::DocumentTooShort { .. });
                    prop_assert!(is_too_short);
                    prop_assert!(len < threshold || len - threshold + 1 < cfg.window_size());
                }
            }
        }
    }
}
