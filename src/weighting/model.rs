use std::collections::BTreeMap;

use crate::config::{Reduction, TermWeightingConfig};
use crate::weighting::tokenizer::Tokenizer;
use crate::weighting::vocabulary::Vocabulary;

/// The weight of every vocabulary term present on one page, in term order.
/// Weights are L2-normalized per page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTermWeights {
    weights: Vec<(String, f64)>,
}

impl PageTermWeights {
    fn from_raw(raw: Vec<(String, f64)>) -> Self {
        let norm = raw.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        let weights = if norm > 0.0 {
            raw.into_iter().map(|(t, w)| (t, w / norm)).collect()
        } else {
            Vec::new()
        };
        Self { weights }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    fn reduce(&self, reduction: Reduction) -> f64 {
        if self.weights.is_empty() {
            return 0.0;
        }
        match reduction {
            Reduction::Sum => self.weights.iter().map(|(_, w)| w).sum(),
            Reduction::Mean => {
                self.weights.iter().map(|(_, w)| w).sum::<f64>() / self.weights.len() as f64
            }
            Reduction::TopMean { k } => {
                let mut sorted: Vec<f64> = self.weights.iter().map(|(_, w)| *w).collect();
                sorted.sort_by(|a, b| b.total_cmp(a));
                let top = &sorted[..k.min(sorted.len())];
                top.iter().sum::<f64>() / top.len() as f64
            }
        }
    }
}

/// Corpus-relative term weighting over all pages of one document.
///
/// Fitting requires the complete corpus: adding a page changes every IDF
/// value, so scores from an earlier fit are invalid once the corpus grows.
#[derive(Debug, Clone)]
pub struct CorpusModel {
    vocabulary: Vocabulary,
    pages: Vec<PageTermWeights>,
    scores: Vec<f64>,
    degenerate: bool,
}

impl CorpusModel {
    /// Fit the model. `corpus[i]` is `None` for pages without text; those
    /// pages take no part in the statistics and score 0.0.
    pub fn fit(corpus: &[Option<&str>], config: &TermWeightingConfig) -> Self {
        let tokenizer = Tokenizer::new(config);
        let counts: Vec<Option<BTreeMap<String, usize>>> = corpus
            .iter()
            .map(|text| text.map(|t| tokenizer.term_counts(t)))
            .collect();

        let vocabulary = Vocabulary::fit(counts.iter().flatten(), config);
        log::debug!(
            "term weighting: {} pages, {} vocabulary terms",
            corpus.len(),
            vocabulary.len()
        );

        let weighted: Vec<PageTermWeights> = counts
            .iter()
            .map(|page| match page {
                Some(page_counts) => weigh_page(page_counts, &vocabulary, config.sublinear_tf),
                None => PageTermWeights::default(),
            })
            .collect();

        let contributing = weighted.iter().filter(|w| !w.is_empty()).count();
        if vocabulary.is_empty() || contributing < 2 {
            log::debug!(
                "term weighting: corpus is degenerate ({contributing} contributing pages), using neutral score {}",
                config.neutral_score
            );
            return Self::degenerate(vocabulary, &counts, config.neutral_score);
        }

        let raw: Vec<Option<f64>> = counts
            .iter()
            .zip(&weighted)
            .map(|(page, w)| page.as_ref().map(|_| w.reduce(config.reduction)))
            .collect();
        let scores = min_max_normalize(&raw, config.neutral_score);

        Self {
            vocabulary,
            pages: weighted,
            scores,
            degenerate: false,
        }
    }

    // IDF is meaningless here; keywords fall back to plain term frequency.
    fn degenerate(
        vocabulary: Vocabulary,
        counts: &[Option<BTreeMap<String, usize>>],
        neutral_score: f64,
    ) -> Self {
        let pages = counts
            .iter()
            .map(|page| match page {
                Some(page_counts) => PageTermWeights::from_raw(
                    page_counts
                        .iter()
                        .map(|(t, c)| (t.clone(), *c as f64))
                        .collect(),
                ),
                None => PageTermWeights::default(),
            })
            .collect();
        let scores = counts
            .iter()
            .map(|page| if page.is_some() { neutral_score } else { 0.0 })
            .collect();

        Self {
            vocabulary,
            pages,
            scores,
            degenerate: true,
        }
    }

    /// Normalized statistic of the page at `position` (0-based), in [0, 1].
    pub fn page_score(&self, position: usize) -> f64 {
        self.scores.get(position).copied().unwrap_or(0.0)
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn page_weights(&self, position: usize) -> Option<&PageTermWeights> {
        self.pages.get(position)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// True when fewer than two pages contribute vocabulary and every page
    /// with text received the neutral score.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

fn weigh_page(counts: &BTreeMap<String, usize>, vocabulary: &Vocabulary, sublinear_tf: bool) -> PageTermWeights {
    let raw = counts
        .iter()
        .filter_map(|(term, &count)| {
            let idf = vocabulary.idf(term)?;
            let tf = if sublinear_tf {
                1.0 + (count as f64).ln()
            } else {
                count as f64
            };
            Some((term.clone(), tf * idf))
        })
        .collect();
    PageTermWeights::from_raw(raw)
}

// Highest page maps to 1.0, lowest to 0.0. Pages without text stay at 0.0.
fn min_max_normalize(raw: &[Option<f64>], neutral_score: f64) -> Vec<f64> {
    let present = raw.iter().flatten().copied();
    let min = present.clone().fold(f64::INFINITY, f64::min);
    let max = present.fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    raw.iter()
        .map(|value| match value {
            None => 0.0,
            Some(_) if !(range > f64::EPSILON) => neutral_score,
            Some(v) => ((v - min) / range).clamp(0.0, 1.0),
        })
        .collect()
}
