use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::PageIndex;

/// The four independently normalized factors of a page's density score.
/// Every field is in [0.0, 1.0] once constructed through `sanitized`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureScores {
    pub tfidf_score: f64,
    pub formula_score: f64,
    pub definition_score: f64,
    pub vocabulary_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Tfidf,
    Formulas,
    Definitions,
    Vocabulary,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Factor::Tfidf => "tfidf",
            Factor::Formulas => "formulas",
            Factor::Definitions => "definitions",
            Factor::Vocabulary => "vocabulary",
        };
        f.write_str(name)
    }
}

impl FeatureScores {
    pub fn new(tfidf_score: f64, formula_score: f64, definition_score: f64, vocabulary_score: f64) -> Self {
        Self {
            tfidf_score,
            formula_score,
            definition_score,
            vocabulary_score,
        }
    }

    /// Fallback for pages with no extractable text.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Clamp every factor into [0, 1]. Non-finite values degrade to 0.0.
    /// Each correction is logged against the page it came from.
    pub fn sanitized(self, page: PageIndex) -> Self {
        Self {
            tfidf_score: clamp_unit(self.tfidf_score, page, Factor::Tfidf),
            formula_score: clamp_unit(self.formula_score, page, Factor::Formulas),
            definition_score: clamp_unit(self.definition_score, page, Factor::Definitions),
            vocabulary_score: clamp_unit(self.vocabulary_score, page, Factor::Vocabulary),
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Tfidf => self.tfidf_score,
            Factor::Formulas => self.formula_score,
            Factor::Definitions => self.definition_score,
            Factor::Vocabulary => self.vocabulary_score,
        }
    }

    pub fn is_normalized(&self) -> bool {
        [
            self.tfidf_score,
            self.formula_score,
            self.definition_score,
            self.vocabulary_score,
        ]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    }
}

fn clamp_unit(value: f64, page: PageIndex, factor: Factor) -> f64 {
    if !value.is_finite() {
        log::warn!("page {page}: {factor} score is not finite ({value}), using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        log::warn!("page {page}: {factor} score {value} outside [0, 1], clamping");
        return value.clamp(0.0, 1.0);
    }
    value
}

/// A single term and its weight on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}
