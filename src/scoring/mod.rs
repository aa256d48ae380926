pub mod analyzer;

use crate::config::{ConfigError, ScoreWeights, WEIGHT_SUM_EPSILON};
use crate::types::FeatureScores;

pub use analyzer::DensityAnalyzer;

/// Weighted combination of the four factors. Pure, no state beyond the weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityScorer {
    weights: ScoreWeights,
}

impl DensityScorer {
    /// Fails fast on an invalid weight vector; weights are never renormalized.
    pub fn new(weights: ScoreWeights) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn compute_density(&self, features: &FeatureScores) -> f64 {
        combine(features, &self.weights)
    }
}

/// Density with the default weight vector
/// {tfidf: 0.60, formulas: 0.15, definitions: 0.15, vocabulary: 0.10}.
pub fn compute_density(features: &FeatureScores) -> f64 {
    combine(features, &ScoreWeights::default())
}

fn combine(features: &FeatureScores, weights: &ScoreWeights) -> f64 {
    let score = features.tfidf_score * weights.tfidf
        + features.formula_score * weights.formulas
        + features.definition_score * weights.definitions
        + features.vocabulary_score * weights.vocabulary;
    debug_assert!(
        !features.is_normalized() || (-1e-9..=1.0 + 2.0 * WEIGHT_SUM_EPSILON).contains(&score),
        "density {score} out of range [0.0, 1.0]"
    );
    score.clamp(0.0, 1.0)
}
