//! Configuration and error types for winnowing.
//!
//! Two shapes are exposed:
//!
//! - [`WinnowConfig`]: a fully resolved configuration. `window_size` is
//!   derived from the two thresholds and cannot be set on its own.
//! - [`WinnowOptions`]: a partial configuration where every field is
//!   optional. Callers layer options over stored defaults with
//!   [`WinnowOptions::merge`] and then [`WinnowOptions::resolve`] them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default k-gram length (guarantee threshold).
pub const DEFAULT_THRESHOLD: usize = 10;

/// Default noise threshold.
pub const DEFAULT_NOISE_THRESHOLD: usize = 5;

/// Resolved winnowing configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WinnowConfig {
    /// K-gram length in characters. Any shared substring at least
    /// `threshold + window_size - 1` characters long is guaranteed to share
    /// an anchor.
    pub threshold: usize,
    /// Matches shorter than this are treated as coincidental noise.
    pub noise_threshold: usize,
}

impl WinnowConfig {
    pub fn new(threshold: usize, noise_threshold: usize) -> Self {
        Self {
            threshold,
            noise_threshold,
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_noise_threshold(mut self, noise_threshold: usize) -> Self {
        self.noise_threshold = noise_threshold;
        self
    }

    /// `threshold - noise_threshold + 1`.
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub fn window_size(&self) -> usize {
        self.threshold
            .saturating_sub(self.noise_threshold)
            .saturating_add(1)
    }

    /// Validate the thresholds independently of any document.
    pub fn validate(&self) -> Result<(), WinnowError> {
        if self.threshold == 0 {
            return Err(WinnowError::InvalidConfig {
                field: "threshold",
                value: self.threshold,
            });
        }
        if self.noise_threshold == 0 {
            return Err(WinnowError::InvalidConfig {
                field: "noise_threshold",
                value: self.noise_threshold,
            });
        }
        if self.noise_threshold > self.threshold {
            return Err(WinnowError::InvalidThresholds {
                threshold: self.threshold,
                noise_threshold: self.noise_threshold,
            });
        }
        Ok(())
    }

    /// Check a sanitized document length (in characters) against the
    /// threshold and the window size.
    pub fn check_length(&self, length: usize) -> Result<(), WinnowError> {
        let required = self.threshold.max(self.window_size());
        if length < required {
            return Err(WinnowError::DocumentTooShort { length, required });
        }
        Ok(())
    }
}

impl Default for WinnowConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
        }
    }
}

/// Partial winnowing configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnowOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_threshold: Option<usize>,
}

impl WinnowOptions {
    /// Options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the default thresholds (10 and 5).
    pub fn standard() -> Self {
        WinnowConfig::default().into()
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_noise_threshold(mut self, noise_threshold: usize) -> Self {
        self.noise_threshold = Some(noise_threshold);
        self
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merge(&self, overrides: &WinnowOptions) -> WinnowOptions {
        WinnowOptions {
            threshold: overrides.threshold.or(self.threshold),
            noise_threshold: overrides.noise_threshold.or(self.noise_threshold),
        }
    }

    /// Turn the options into a resolved configuration.
    ///
    /// Fails with [`WinnowError::MissingConfiguration`] naming the first
    /// absent field. The thresholds are not validated here.
    pub fn resolve(&self) -> Result<WinnowConfig, WinnowError> {
        let threshold = self
            .threshold
            .ok_or(WinnowError::MissingConfiguration { field: "threshold" })?;
        let noise_threshold = self
            .noise_threshold
            .ok_or(WinnowError::MissingConfiguration {
                field: "noise_threshold",
            })?;
        Ok(WinnowConfig::new(threshold, noise_threshold))
    }
}

impl From<WinnowConfig> for WinnowOptions {
    fn from(cfg: WinnowConfig) -> Self {
        Self {
            threshold: Some(cfg.threshold),
            noise_threshold: Some(cfg.noise_threshold),
        }
    }
}

/// Errors returned by the winnowing pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WinnowError {
    #[error("missing configuration: {field}")]
    MissingConfiguration { field: &'static str },

    #[error("invalid config: {field} must be >= 1 (got {value})")]
    InvalidConfig { field: &'static str, value: usize },

    #[error("noise threshold {noise_threshold} exceeds threshold {threshold}")]
    InvalidThresholds {
        threshold: usize,
        noise_threshold: usize,
    },

    #[error("document too short: got {length}, need at least {required}")]
    DocumentTooShort { length: usize, required: usize },

    #[error("malformed fingerprint: {0}")]
    MalformedFingerprint(String),
}
