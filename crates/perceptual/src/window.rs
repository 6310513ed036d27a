//! Window minimum selection and fingerprint assembly.
//!
//! [`select_minima`] slides a window of `window_size` hash tokens over the
//! sequence one token at a time and picks each window's minimum hash. When the
//! minimum occurs more than once in a window the rightmost occurrence wins.
//! [`assemble`] then drops selections that repeat the previously emitted
//! position.
//!
//! Together these give the winnowing guarantee: any shared substring of at
//! least `threshold + window_size - 1` characters contains an anchor, and a
//! run of equal hashes does not produce a new anchor per window.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::WinnowError;
use crate::fingerprint::{Anchor, Fingerprint};
use crate::shingles::HashToken;

/// Minimum hash of one window and its absolute position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub hash: u32,
    pub position: usize,
}

/// Select one minimum per window via a monotonic deque, O(n).
///
/// Emits exactly `tokens.len() - window_size + 1` selections, in window
/// order. Fails with [`WinnowError::DocumentTooShort`] when there are fewer
/// tokens than `window_size`.
pub fn select_minima(
    tokens: &[HashToken],
    window_size: usize,
) -> Result<Vec<Selection>, WinnowError> {
    if window_size == 0 {
        return Err(WinnowError::InvalidConfig {
            field: "window_size",
            value: window_size,
        });
    }
    let n = tokens.len();
    if n < window_size {
        return Err(WinnowError::DocumentTooShort {
            length: n,
            required: window_size,
        });
    }

    let mut out = Vec::with_capacity(n - window_size + 1);
    // Indices of the current window with strictly increasing hash values; the
    // front is the window minimum.
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(window_size);

    for (i, token) in tokens.iter().enumerate() {
        // An equal or smaller newcomer evicts older entries, so on ties the
        // later index is the one that survives.
        while let Some(&j) = dq.back() {
            if token.value <= tokens[j].value {
                dq.pop_back();
            } else {
                break;
            }
        }
        dq.push_back(i);

        if i + 1 < window_size {
            continue;
        }
        let window_start = i + 1 - window_size;
        while let Some(&j) = dq.front() {
            if j < window_start {
                dq.pop_front();
            } else {
                break;
            }
        }
        if let Some(&idx) = dq.front() {
            out.push(Selection {
                hash: tokens[idx].value,
                position: tokens[idx].position,
            });
        }
    }

    Ok(out)
}

/// Collapse consecutive selections of the same position into one anchor.
pub fn assemble(selections: &[Selection]) -> Fingerprint {
    let mut anchors = Vec::with_capacity(selections.len());
    let mut last_position: Option<usize> = None;
    for sel in selections {
        if last_position != Some(sel.position) {
            anchors.push(Anchor {
                hash: sel.hash,
                position: sel.position,
            });
            last_position = Some(sel.position);
        }
    }
    Fingerprint::from_sorted(anchors)
}
