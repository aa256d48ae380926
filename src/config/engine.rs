use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigError, DetectorConfig, ExtractionConfig, ScoreWeights, TermWeightingConfig,
};
use crate::types::identifiers::sha256_tag;

pub const CURRENT_CONFIG_VERSION: &str = "1";

/// The complete, versioned configuration of the density engine.
///
/// Every constant the scoring pipeline uses lives here, so detection rules,
/// term weighting and the combiner can be swapped without touching code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub version: String,
    pub weights: ScoreWeights,
    pub term_weighting: TermWeightingConfig,
    pub detectors: DetectorConfig,
    /// Default selection parameters for callers that do not supply their own.
    pub extraction: ExtractionConfig,
    pub keywords_top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION.into(),
            weights: ScoreWeights::default(),
            term_weighting: TermWeightingConfig::default(),
            detectors: DetectorConfig::default(),
            extraction: ExtractionConfig::default(),
            keywords_top_k: 10,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version.clone()));
        }
        self.weights.validate()?;
        self.term_weighting.validate()?;
        self.detectors.validate()?;
        self.extraction.validate()
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// `sha256:<hex>` over the canonical JSON form of this config.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        let bytes = serde_json::to_vec(self)?;
        Ok(sha256_tag(&bytes))
    }
}
