use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detectors::FillerReason;
use crate::selection::{ScoreStatistics, DEFAULT_HISTOGRAM_BINS};
use crate::types::{
    AnalysisVersion, ExtractionSet, FeatureScores, Keyword, PageAnalysis, PageIndex,
    ScoredDocument, SelectionMetadata, SelectionResult,
};

/// Keywords shown per page in the tabular summary.
pub const SUMMARY_KEYWORDS: usize = 5;

/// One row of the per-page table handed to exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page_index: PageIndex,
    pub rank: usize,
    pub density_score: f64,
    pub factors: FeatureScores,
    pub top_keywords: Vec<Keyword>,
    pub is_filler: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filler_reason: Option<FillerReason>,
    pub extraction_unavailable: bool,
    pub selected: bool,
}

/// Everything an exporter needs: the extraction set plus a summary row for
/// every analyzed page, selected or not, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_version: AnalysisVersion,
    pub created_at: DateTime<Utc>, // informational only
    pub extraction_set: ExtractionSet,
    pub selection: SelectionMetadata,
    pub statistics: ScoreStatistics,
    pub pages: Vec<PageSummary>,
}

impl AnalysisReport {
    pub fn build(scored: &ScoredDocument, result: &SelectionResult) -> Self {
        let pages = scored
            .pages
            .iter()
            .map(|page| summarize_page(page, result))
            .collect();

        Self {
            analysis_version: scored.analysis_version.clone(),
            created_at: scored.created_at,
            extraction_set: result.extraction_set.clone(),
            selection: result.selection.clone(),
            statistics: ScoreStatistics::from_pages(&scored.pages, DEFAULT_HISTOGRAM_BINS),
            pages,
        }
    }
}

fn summarize_page(page: &PageAnalysis, result: &SelectionResult) -> PageSummary {
    let rank = result
        .ranking
        .iter()
        .find(|r| r.index == page.index)
        .map(|r| r.rank)
        .unwrap_or(0);

    PageSummary {
        page_index: page.index,
        rank,
        density_score: page.density_score,
        factors: page.features,
        top_keywords: page.keywords.iter().take(SUMMARY_KEYWORDS).cloned().collect(),
        is_filler: page.is_filler,
        filler_reason: page.filler_reason,
        extraction_unavailable: page.extraction_unavailable,
        selected: result.extraction_set.contains(page.index),
    }
}
