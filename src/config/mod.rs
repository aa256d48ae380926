// Key point:
// Serializable
// Comparable
// Explicit defaults
// Validated before any scoring runs

pub mod detection;
pub mod engine;
pub mod extraction;
pub mod term_weighting;
pub mod weights;

use thiserror::Error;

pub use detection::{DetectorConfig, FillerConfig, VocabularyConfig};
pub use engine::{EngineConfig, CURRENT_CONFIG_VERSION};
pub use extraction::ExtractionConfig;
pub use term_weighting::{DocumentFrequency, NgramRange, Reduction, StopWords, TermWeightingConfig};
pub use weights::{ScoreWeights, WEIGHT_SUM_EPSILON};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Score weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("Weight for {factor} must be within [0, 1], got {value}")]
    WeightOutOfRange { factor: String, value: f64 },

    #[error("top_percent must be within (0, 100], got {0}")]
    InvalidTopPercent(f64),

    #[error("min_score must be within [0, 1], got {0}")]
    InvalidMinScore(f64),

    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid term weighting setting: {0}")]
    InvalidTermWeighting(String),

    #[error("Invalid detector setting: {0}")]
    InvalidDetectorSetting(String),

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub(crate) fn ensure_unit_ratio(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDetectorSetting(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDetectorSetting(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}
