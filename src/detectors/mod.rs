//! Pattern layer: cheap, explainable per-page signals.
//!
//! Detectors never fail. Empty or malformed text yields 0.0 scores and a
//! filler classification, never an error.

pub mod filler;
pub mod keywords;
pub mod patterns;
pub mod vocabulary;

use crate::config::{ConfigError, DetectorConfig};
use crate::document::PageStats;

pub use filler::FillerReason;
pub use keywords::extract_keywords;
pub use patterns::{saturated_density, PatternSet};
pub use vocabulary::vocabulary_richness;

use filler::FillerRules;

/// How structural features are detected on one page.
///
/// Implementations must be pure: the analyzer runs them concurrently across
/// pages with no shared mutable state.
pub trait FeatureDetector: Send + Sync {
    fn detect_formula_density(&self, text: &str) -> f64;

    fn detect_definition_density(&self, text: &str) -> f64;

    fn compute_vocabulary_richness(&self, text: &str) -> f64;

    fn page_stats(&self, text: &str) -> PageStats;

    fn filler_reason(&self, text: &str, stats: &PageStats) -> Option<FillerReason>;

    fn classify_filler(&self, text: &str, stats: &PageStats) -> bool {
        self.filler_reason(text, stats).is_some()
    }
}

/// Regex and lexical detector driven entirely by a [`DetectorConfig`].
#[derive(Debug, Clone)]
pub struct PatternDetector {
    config: DetectorConfig,
    formulas: PatternSet,
    definitions: PatternSet,
    citations: PatternSet,
}

impl PatternDetector {
    pub fn new(config: &DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            formulas: PatternSet::compile(&config.formula_patterns)?,
            definitions: PatternSet::compile(&config.definition_patterns)?,
            citations: PatternSet::compile(&config.citation_patterns)?,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl FeatureDetector for PatternDetector {
    fn detect_formula_density(&self, text: &str) -> f64 {
        saturated_density(
            self.formulas.count(text),
            text,
            self.config.chars_per_unit,
            self.config.formula_saturation,
        )
    }

    fn detect_definition_density(&self, text: &str) -> f64 {
        saturated_density(
            self.definitions.count(text),
            text,
            self.config.chars_per_unit,
            self.config.definition_saturation,
        )
    }

    fn compute_vocabulary_richness(&self, text: &str) -> f64 {
        vocabulary_richness(text, &self.config.vocabulary)
    }

    fn page_stats(&self, text: &str) -> PageStats {
        PageStats::from_text(text, self.config.filler.short_line_words)
    }

    fn filler_reason(&self, text: &str, stats: &PageStats) -> Option<FillerReason> {
        FillerRules {
            config: &self.config.filler,
            headings: &self.config.filler_headings,
            citations: &self.citations,
            formulas: &self.formulas,
        }
        .classify(text, stats)
    }
}
