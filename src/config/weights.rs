use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::types::Factor;

/// Tolerance for the weight-sum check.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Fixed weight vector of the density combiner.
/// Never renormalized: an invalid vector is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub tfidf: f64,
    pub formulas: f64,
    pub definitions: f64,
    pub vocabulary: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            tfidf: 0.60,
            formulas: 0.15,
            definitions: 0.15,
            vocabulary: 0.10,
        }
    }
}

impl ScoreWeights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Tfidf => self.tfidf,
            Factor::Formulas => self.formulas,
            Factor::Definitions => self.definitions,
            Factor::Vocabulary => self.vocabulary,
        }
    }

    pub fn sum(&self) -> f64 {
        self.tfidf + self.formulas + self.definitions + self.vocabulary
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for factor in [
            Factor::Tfidf,
            Factor::Formulas,
            Factor::Definitions,
            Factor::Vocabulary,
        ] {
            let value = self.get(factor);
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::WeightOutOfRange {
                    factor: factor.to_string(),
                    value,
                });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::InvalidWeights { sum });
        }
        Ok(())
    }
}
