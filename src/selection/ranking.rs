use std::cmp::Ordering;

use crate::types::{PageAnalysis, RankedPage};

/// Order pages by (density desc, index asc) and number them from 1.
pub fn rank_pages(pages: &[PageAnalysis]) -> Vec<RankedPage> {
    let mut ordered: Vec<&PageAnalysis> = pages.iter().collect();
    ordered.sort_by(|a, b| {
        // Descending score
        let score_cmp = b
            .density_score
            .partial_cmp(&a.density_score)
            .unwrap_or(Ordering::Equal);
        if score_cmp != Ordering::Equal {
            score_cmp
        } else {
            // Ascending index
            a.index.cmp(&b.index)
        }
    });

    debug_assert!(ordered.windows(2).all(|w| {
        let a = w[0];
        let b = w[1];
        a.density_score > b.density_score
            || (a.density_score == b.density_score && a.index <= b.index)
    }));

    ordered
        .into_iter()
        .enumerate()
        .map(|(position, page)| RankedPage {
            rank: position + 1,
            index: page.index,
            density_score: page.density_score,
            is_filler: page.is_filler,
        })
        .collect()
}
