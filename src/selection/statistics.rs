use serde::{Deserialize, Serialize};

use crate::types::PageAnalysis;

pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Summary of all density scores of a document. Reporting only; selection
/// never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    pub total_pages: usize,
    pub filler_pages: usize,
    pub content_pages: usize,
    pub unavailable_pages: usize,

    pub min_score: f64,
    pub max_score: f64,
    pub mean_score: f64,
    pub median_score: f64,
    /// Population standard deviation.
    pub std_score: f64,

    pub histogram: Vec<HistogramBin>,
}

impl ScoreStatistics {
    pub fn from_pages(pages: &[PageAnalysis], bins: usize) -> Self {
        let bins = bins.max(1);
        let filler_pages = pages.iter().filter(|p| p.is_filler).count();
        let unavailable_pages = pages.iter().filter(|p| p.extraction_unavailable).count();

        let mut scores: Vec<f64> = pages.iter().map(|p| p.density_score).collect();
        scores.sort_by(f64::total_cmp);

        let mut histogram: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: i as f64 / bins as f64,
                upper: (i + 1) as f64 / bins as f64,
                count: 0,
            })
            .collect();
        for score in &scores {
            let bin = ((score * bins as f64) as usize).min(bins - 1);
            histogram[bin].count += 1;
        }

        let (min_score, max_score, mean_score, median_score, std_score) = if scores.is_empty() {
            (0.0, 0.0, 0.0, 0.0, 0.0)
        } else {
            let n = scores.len() as f64;
            let mean = scores.iter().sum::<f64>() / n;
            let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
            let mid = scores.len() / 2;
            let median = if scores.len() % 2 == 0 {
                (scores[mid - 1] + scores[mid]) / 2.0
            } else {
                scores[mid]
            };
            (scores[0], scores[scores.len() - 1], mean, median, variance.sqrt())
        };

        Self {
            total_pages: pages.len(),
            filler_pages,
            content_pages: pages.len() - filler_pages,
            unavailable_pages,
            min_score,
            max_score,
            mean_score,
            median_score,
            std_score,
            histogram,
        }
    }
}
