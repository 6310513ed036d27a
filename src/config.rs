//! YAML configuration file support.
//!
//! A single file selects the fingerprinting strategy and carries the options
//! for both strategies, so switching between them is a one-line change.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "plagiarism screening"
//! strategy: winnow
//!
//! digest:
//!   algorithm: sha256
//!
//! winnow:
//!   threshold: 10
//!   noise_threshold: 5
//! ```

use std::fs;
use std::path::Path;

use canonical::DigestAlgorithm;
use perceptual::{DEFAULT_NOISE_THRESHOLD, DEFAULT_THRESHOLD, WinnowConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digest::DigestOptions;
use crate::error::FingerprintError;
use crate::strategy::StrategyConfig;
use crate::winnowing::WinnowOptions;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Which strategy a configuration file selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Digest,
    #[default]
    Winnow,
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocprintConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub strategy: StrategyKind,

    #[serde(default)]
    pub digest: DigestYamlConfig,

    #[serde(default)]
    pub winnow: WinnowYamlConfig,
}

impl DocprintConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DocprintConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the version and both strategy sections.
    ///
    /// The unselected section is validated too, so a file stays valid when
    /// only `strategy` is flipped.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.digest.validate()?;
        self.winnow.validate()?;

        Ok(())
    }

    /// Options for the selected strategy.
    pub fn strategy_config(&self) -> Result<StrategyConfig, FingerprintError> {
        Ok(match self.strategy {
            StrategyKind::Digest => StrategyConfig::Digest(self.digest.to_options()?),
            StrategyKind::Winnow => StrategyConfig::Winnow(self.winnow.to_options()),
        })
    }
}

impl Default for DocprintConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            strategy: StrategyKind::default(),
            digest: DigestYamlConfig::default(),
            winnow: WinnowYamlConfig::default(),
        }
    }
}

/// Digest section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestYamlConfig {
    /// `md5`, `sha1` or `sha256`, case-insensitive.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl DigestYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.algorithm
            .parse::<DigestAlgorithm>()
            .map(|_| ())
            .map_err(|e| ConfigLoadError::Validation(format!("digest: {e}")))
    }

    pub fn to_options(&self) -> Result<DigestOptions, FingerprintError> {
        DigestOptions::new().with_algorithm_name(&self.algorithm)
    }
}

impl Default for DigestYamlConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
        }
    }
}

/// Winnow section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnowYamlConfig {
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    #[serde(default = "default_noise_threshold")]
    pub noise_threshold: usize,
}

impl WinnowYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        WinnowConfig::new(self.threshold, self.noise_threshold)
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("winnow: {e}")))
    }

    pub fn to_options(&self) -> WinnowOptions {
        WinnowOptions::new()
            .with_threshold(self.threshold)
            .with_noise_threshold(self.noise_threshold)
    }
}

impl Default for WinnowYamlConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            noise_threshold: default_noise_threshold(),
        }
    }
}

fn default_algorithm() -> String {
    DigestAlgorithm::default().as_str().to_string()
}

fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

fn default_noise_threshold() -> usize {
    DEFAULT_NOISE_THRESHOLD
}
