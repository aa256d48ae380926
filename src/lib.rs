//! Deterministic content density scoring for multi-page documents.
//!
//! `density-core` scores every page of a document by information density and
//! selects the highest-value subset. Scoring combines a corpus-relative
//! TF-IDF statistic with regex/lexical detectors (formulas, definitions,
//! vocabulary richness) and classifies filler pages (contents, indices,
//! references, near-empty pages). All operations are deterministic:
//! identical text and configuration always produce identical scores.
//!
//! The pipeline has two phases. A [`document::Document`] is collected in full
//! first, then [`scoring::DensityAnalyzer`] fits the corpus model and scores
//! every page. The resulting [`types::ScoredDocument`] can be ranked and
//! selected by [`selection::PageSelector`] any number of times.

pub mod config;
pub mod detectors;
pub mod document;
pub mod report;
pub mod scoring;
pub mod selection;
pub mod types;
pub mod weighting;

pub use config::{ConfigError, EngineConfig, ExtractionConfig};
pub use document::{Document, DocumentError};
pub use scoring::{compute_density, DensityAnalyzer};
pub use selection::PageSelector;
pub use types::{AnalysisError, ExtractionSet, ScoredDocument, SelectionResult};
