use std::collections::HashSet;

use crate::config::VocabularyConfig;

/// Type-token ratio over lower-cased alphabetic words.
///
/// Words shorter than `min_word_chars` (3 by default) are dropped before
/// counting, so "x y z" or "to be or go" scores 0.0. Otherwise a page without
/// repeated words scores 1.0 (with the default reference ratio), and a page
/// with fewer than `min_words` counted words scores 0.0.
pub fn vocabulary_richness(text: &str, config: &VocabularyConfig) -> f64 {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| w.chars().count() >= config.min_word_chars)
        .collect();

    if words.is_empty() || words.len() < config.min_words {
        return 0.0;
    }

    let unique: HashSet<&str> = words.iter().copied().collect();
    let ratio = unique.len() as f64 / words.len() as f64;
    (ratio / config.reference_ratio).min(1.0)
}
