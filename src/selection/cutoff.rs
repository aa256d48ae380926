use crate::config::ExtractionConfig;
use crate::types::{PageIndex, RankedPage};

// Absorbs representation error in products such as 40.0 * 5 / 100.
const CUTOFF_EPSILON: f64 = 1e-9;

pub struct CutoffResult {
    pub selected: Vec<PageIndex>,
    pub candidates: usize,
    pub excluded_as_filler: usize,
    pub excluded_below_min_score: usize,
    pub excluded_by_cutoff: usize,
}

/// Pages kept for `top_percent` of the whole document:
/// `ceil(top_percent / 100 * total_pages)`, at least one page.
pub fn keep_count(top_percent: f64, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 0;
    }
    let exact = top_percent * total_pages as f64 / 100.0;
    let count = (exact - CUTOFF_EPSILON).ceil().max(1.0) as usize;
    count.min(total_pages)
}

/// Walk pages in rank order, filter them into candidates and keep the first
/// `keep_count` of those. Filler exclusion is counted before the score check.
pub fn apply_cutoff(ranking: &[RankedPage], config: &ExtractionConfig) -> CutoffResult {
    let limit = keep_count(config.top_percent, ranking.len());

    let mut selected = Vec::new();
    let mut candidates = 0;
    let mut excluded_as_filler = 0;
    let mut excluded_below_min_score = 0;
    let mut excluded_by_cutoff = 0;

    for page in ranking {
        if config.exclude_filler && page.is_filler {
            excluded_as_filler += 1;
            continue;
        }
        if page.density_score < config.min_score {
            excluded_below_min_score += 1;
            continue;
        }

        candidates += 1;
        if selected.len() < limit {
            selected.push(page.index);
        } else {
            excluded_by_cutoff += 1;
        }
    }

    CutoffResult {
        selected,
        candidates,
        excluded_as_filler,
        excluded_below_min_score,
        excluded_by_cutoff,
    }
}
