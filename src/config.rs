//! Bundled pipeline configuration.
//!
//! All stage configurations plus the initial threshold pair in one
//! serde-friendly struct, loadable from a YAML file so deployments can tune
//! the screening behavior without a rebuild.
//!
//! ```yaml
//! extract:
//!   version: 1
//!   max_payload_bytes: 26214400
//!   strip_control_chars: true
//!
//! normalize:
//!   version: 1
//!   normalize_unicode: true
//!   strip_punctuation: true
//!   lowercase: true
//!
//! similarity:
//!   version: 1
//!   shingle_k: 3
//!   seed: 101155951
//!   use_parallel: false
//!   skip_identical_hash: false
//!
//! detect:
//!   version: 1
//!   weights: { repetition: 0.30, structure: 0.25, vocabulary: 0.25, transitions: 0.20 }
//!   min_text_chars: 300
//!   opening_prefix_chars: 20
//!   high_confidence_mean: 60.0
//!   medium_confidence_mean: 35.0
//!   artificial_indicator_threshold: 70
//!
//! thresholds:
//!   warning: 40.0
//!   danger: 70.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use detect::DetectConfig;
use extract::ExtractConfig;
use normalize::NormalizeConfig;
use policy::Thresholds;
use similarity::SimilarityConfig;

/// Errors that can occur when loading or validating a pipeline config.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
    #[error("validation error: {0}")]
    Validation(String),
}

/// Every stage configuration plus the initial threshold pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PipelineConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub similarity: SimilarityConfig,
    #[serde(default)]
    pub detect: DetectConfig,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl PipelineConfig {
    /// Load and validate a bundle from a YAML file.
    pub fn load_from_yaml(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate a bundle from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigLoadError> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate every stage configuration and the threshold pair.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.extract
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        if self.normalize.version == 0 {
            return Err(ConfigLoadError::Validation(
                "normalize config version must be >= 1".into(),
            ));
        }
        self.similarity
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.detect
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.thresholds
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        Ok(())
    }
}
