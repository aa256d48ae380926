use std::collections::{BTreeMap, HashSet};

use crate::config::{NgramRange, TermWeightingConfig};
use crate::weighting::stop_words::stop_word_set;

/// Lowercases, splits on non-word characters, drops short tokens and stop
/// words, then emits every n-gram in the configured range.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
    min_chars: usize,
    ngram_range: NgramRange,
}

impl Tokenizer {
    pub fn new(config: &TermWeightingConfig) -> Self {
        Self {
            stop_words: stop_word_set(&config.stop_words),
            min_chars: config.token_min_chars,
            ngram_range: config.ngram_range,
        }
    }

    /// Word tokens after stop-word removal.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| w.chars().count() >= self.min_chars)
            .filter(|w| !self.stop_words.contains(*w))
            .map(String::from)
            .collect()
    }

    /// All n-gram terms of the text, in order of appearance.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let words = self.words(text);
        let NgramRange { min, max } = self.ngram_range;

        let mut terms = Vec::new();
        for n in min..=max {
            if n > words.len() {
                break;
            }
            if n == 1 {
                terms.extend(words.iter().cloned());
            } else {
                terms.extend(words.windows(n).map(|w| w.join(" ")));
            }
        }
        terms
    }

    /// Term counts of the text, keyed in lexical order.
    pub fn term_counts(&self, text: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for term in self.terms(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }
}
