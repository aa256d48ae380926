use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Parameters of one selection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Share of the whole document to keep, in (0, 100].
    pub top_percent: f64,
    /// Minimum density score a page needs to be a candidate, in [0, 1].
    pub min_score: f64,
    pub exclude_filler: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            top_percent: 20.0,
            min_score: 0.0,
            exclude_filler: true,
        }
    }
}

impl ExtractionConfig {
    pub fn new(top_percent: f64, min_score: f64, exclude_filler: bool) -> Result<Self, ConfigError> {
        let config = Self {
            top_percent,
            min_score,
            exclude_filler,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.top_percent.is_finite() || self.top_percent <= 0.0 || self.top_percent > 100.0 {
            return Err(ConfigError::InvalidTopPercent(self.top_percent));
        }
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(ConfigError::InvalidMinScore(self.min_score));
        }
        Ok(())
    }
}
