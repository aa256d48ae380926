use std::collections::BTreeMap;

use crate::config::TermWeightingConfig;

/// Corpus vocabulary with the inverse document frequency of every kept term.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    idf: BTreeMap<String, f64>,
}

impl Vocabulary {
    /// Build the vocabulary from per-page term counts.
    ///
    /// Terms outside the `[min_df, max_df]` page-frequency window are pruned,
    /// then the `max_features` most frequent terms across the corpus are kept
    /// (ties broken by term). IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit<'a>(
        page_counts: impl IntoIterator<Item = &'a BTreeMap<String, usize>>,
        config: &TermWeightingConfig,
    ) -> Self {
        let mut n_pages = 0;
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        let mut corpus_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in page_counts {
            n_pages += 1;
            for (term, count) in counts {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
                *corpus_frequency.entry(term.as_str()).or_insert(0) += count;
            }
        }

        if n_pages == 0 {
            return Self::default();
        }

        let min_pages = config.min_df.pages(n_pages);
        let max_pages = config.max_df.pages(n_pages);

        let mut kept: Vec<(&str, usize)> = document_frequency
            .iter()
            .filter(|&(_, &df)| df as f64 >= min_pages && df as f64 <= max_pages)
            .map(|(&term, &df)| (term, df))
            .collect();

        if kept.len() > config.max_features {
            kept.sort_by(|a, b| {
                corpus_frequency[b.0]
                    .cmp(&corpus_frequency[a.0])
                    .then_with(|| a.0.cmp(b.0))
            });
            kept.truncate(config.max_features);
        }

        let n = n_pages as f64;
        let idf = kept
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term.to_string(), weight)
            })
            .collect();

        Self { idf }
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.idf.keys().map(String::as_str)
    }
}
