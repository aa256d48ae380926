pub mod cutoff;
pub mod ranking;
pub mod statistics;

use crate::config::{ConfigError, ExtractionConfig};
use crate::types::{ExtractionSet, ScoredDocument, SelectionMetadata, SelectionResult};
pub use cutoff::{apply_cutoff, keep_count, CutoffResult};
pub use ranking::rank_pages;
pub use statistics::{HistogramBin, ScoreStatistics, DEFAULT_HISTOGRAM_BINS};

/// Turns a scored document into an extraction set.
///
/// Selection is side-effect free and never recomputes scores; it may be run
/// any number of times against the same `ScoredDocument`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageSelector;

impl PageSelector {
    pub fn select(
        &self,
        scored: &ScoredDocument,
        config: &ExtractionConfig,
    ) -> Result<SelectionResult, ConfigError> {
        config.validate()?;

        // 1. Ranking Phase
        let ranking = rank_pages(&scored.pages);

        // 2. Cutoff Phase
        let CutoffResult {
            selected,
            candidates,
            excluded_as_filler,
            excluded_below_min_score,
            excluded_by_cutoff,
        } = apply_cutoff(&ranking, config);

        // 3. Back to reading order
        let extraction_set = ExtractionSet::from_unordered(selected);

        if extraction_set.is_empty() {
            log::debug!("selection produced no pages ({candidates} candidates)");
        }

        let metadata = SelectionMetadata {
            top_percent: config.top_percent,
            min_score: config.min_score,
            exclude_filler: config.exclude_filler,
            pages_considered: scored.pages.len(),
            candidates,
            pages_selected: extraction_set.len(),
            excluded_as_filler,
            excluded_below_min_score,
            excluded_by_cutoff,
        };

        Ok(SelectionResult {
            extraction_set,
            ranking,
            selection: metadata,
        })
    }

    pub fn statistics(&self, scored: &ScoredDocument) -> ScoreStatistics {
        ScoreStatistics::from_pages(&scored.pages, DEFAULT_HISTOGRAM_BINS)
    }
}
