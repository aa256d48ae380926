use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A document-frequency bound: an absolute page count or a share of pages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentFrequency {
    Count(usize),
    Proportion(f64),
}

impl DocumentFrequency {
    /// The bound expressed in pages for a corpus of `n_pages`.
    pub fn pages(&self, n_pages: usize) -> f64 {
        match *self {
            DocumentFrequency::Count(count) => count as f64,
            DocumentFrequency::Proportion(share) => share * n_pages as f64,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        match *self {
            DocumentFrequency::Count(_) => Ok(()),
            DocumentFrequency::Proportion(share) if share.is_finite() && (0.0..=1.0).contains(&share) => Ok(()),
            DocumentFrequency::Proportion(share) => Err(ConfigError::InvalidTermWeighting(format!(
                "{name} proportion must be within [0, 1], got {share}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramRange {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWords {
    English,
    None,
    Custom(Vec<String>),
}

/// How a page's term-weight vector is reduced to one scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    Sum,
    Mean,
    TopMean { k: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermWeightingConfig {
    /// Vocabulary cap; the most frequent terms across the corpus win.
    pub max_features: usize,
    pub min_df: DocumentFrequency,
    pub max_df: DocumentFrequency,
    pub ngram_range: NgramRange,
    pub stop_words: StopWords,
    /// Shortest token kept, in characters.
    pub token_min_chars: usize,
    pub sublinear_tf: bool,
    pub reduction: Reduction,
    /// Score given to every page when the corpus cannot be weighted.
    pub neutral_score: f64,
}

impl Default for TermWeightingConfig {
    fn default() -> Self {
        Self {
            max_features: 1000,
            min_df: DocumentFrequency::Count(1),
            max_df: DocumentFrequency::Proportion(0.8),
            ngram_range: NgramRange { min: 1, max: 2 },
            stop_words: StopWords::English,
            token_min_chars: 2,
            sublinear_tf: false,
            reduction: Reduction::Sum,
            neutral_score: 0.5,
        }
    }
}

impl TermWeightingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_features == 0 {
            return Err(ConfigError::InvalidTermWeighting(
                "max_features must be at least 1".into(),
            ));
        }
        self.min_df.validate("min_df")?;
        self.max_df.validate("max_df")?;

        let NgramRange { min, max } = self.ngram_range;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidTermWeighting(format!(
                "ngram_range must satisfy 1 <= min <= max, got ({min}, {max})"
            )));
        }
        if self.token_min_chars == 0 {
            return Err(ConfigError::InvalidTermWeighting(
                "token_min_chars must be at least 1".into(),
            ));
        }
        if let Reduction::TopMean { k: 0 } = self.reduction {
            return Err(ConfigError::InvalidTermWeighting(
                "top_mean reduction needs k >= 1".into(),
            ));
        }
        if !self.neutral_score.is_finite() || !(0.0..=1.0).contains(&self.neutral_score) {
            return Err(ConfigError::InvalidTermWeighting(format!(
                "neutral_score must be within [0, 1], got {}",
                self.neutral_score
            )));
        }
        Ok(())
    }
}
