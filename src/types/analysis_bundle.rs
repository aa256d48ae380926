use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::detectors::FillerReason;
use crate::document::{Document, DocumentError};
use crate::types::identifiers::{AnalysisVersion, PageIndex, PageVersion};
use crate::types::scores::{FeatureScores, Keyword};

/// Everything the engine computed for one page.
/// Filler classification and density are independent outputs;
/// they are only combined at selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageAnalysis {
    pub index: PageIndex,
    pub version: PageVersion,
    pub extraction_unavailable: bool,
    pub is_filler: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filler_reason: Option<FillerReason>,
    pub features: FeatureScores,
    pub density_score: f64,
    pub keywords: Vec<Keyword>,
}

/// A fully scored document. Reusable for any number of selection runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub analysis_version: AnalysisVersion,
    pub config_fingerprint: String,
    pub created_at: DateTime<Utc>, // informational only
    pub pages: Vec<PageAnalysis>,
}

impl ScoredDocument {
    pub fn new(config_fingerprint: String, pages: Vec<PageAnalysis>) -> Self {
        let analysis_version = AnalysisVersion::compute(
            &config_fingerprint,
            pages.iter().map(|p| (p.index, &p.version)),
        );
        Self {
            analysis_version,
            config_fingerprint,
            created_at: Utc::now(),
            pages,
        }
    }

    /// Recompute the analysis version from the stored pages.
    pub fn recomputed_version(&self) -> AnalysisVersion {
        AnalysisVersion::compute(
            &self.config_fingerprint,
            self.pages.iter().map(|p| (p.index, &p.version)),
        )
    }

    /// True when these scores were computed from exactly this document's text.
    /// A false result means the source changed and scoring must be re-run.
    pub fn is_current_for(&self, document: &Document) -> bool {
        self.pages.len() == document.pages().len()
            && self
                .pages
                .iter()
                .zip(document.pages())
                .all(|(scored, page)| scored.index == page.index && scored.version == page.version)
    }

    pub fn page(&self, index: PageIndex) -> Option<&PageAnalysis> {
        self.pages.iter().find(|p| p.index == index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A page placed in score order. Rank 1 is the highest density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPage {
    pub rank: usize,
    pub index: PageIndex,
    pub density_score: f64,
    pub is_filler: bool,
}

/// Selected page indices in ascending document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionSet(Vec<PageIndex>);

impl ExtractionSet {
    pub fn from_unordered(mut pages: Vec<PageIndex>) -> Self {
        pages.sort();
        pages.dedup();
        ExtractionSet(pages)
    }

    pub fn pages(&self) -> &[PageIndex] {
        &self.0
    }

    pub fn contains(&self, index: PageIndex) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageIndex> {
        self.0.iter()
    }
}

/// Metadata describing the outcome of one selection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub top_percent: f64,
    pub min_score: f64,
    pub exclude_filler: bool,

    pub pages_considered: usize,
    pub candidates: usize,
    pub pages_selected: usize,

    pub excluded_as_filler: usize,
    pub excluded_below_min_score: usize,
    pub excluded_by_cutoff: usize,
}

/// The final result of a selection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub extraction_set: ExtractionSet,
    pub ranking: Vec<RankedPage>,
    pub selection: SelectionMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Stale analysis: stored version {stored}, content hashes to {computed}")]
    StaleAnalysis { stored: String, computed: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
