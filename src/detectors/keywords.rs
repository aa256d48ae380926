use std::cmp::Ordering;

use crate::types::Keyword;
use crate::weighting::PageTermWeights;

/// The `top_k` heaviest terms of a page, heaviest first.
/// Equal weights are ordered alphabetically.
pub fn extract_keywords(weights: &PageTermWeights, top_k: usize) -> Vec<Keyword> {
    let mut ranked: Vec<(&str, f64)> = weights.iter().collect();
    ranked.sort_by(|a, b| {
        // Descending weight
        let weight_cmp = b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal);
        if weight_cmp != Ordering::Equal {
            weight_cmp
        } else {
            // Ascending term
            a.0.cmp(b.0)
        }
    });
    ranked.truncate(top_k);

    ranked
        .into_iter()
        .map(|(term, weight)| Keyword::new(term, weight))
        .collect()
}
