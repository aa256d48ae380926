use serde::{Deserialize, Serialize};

use crate::config::FillerConfig;
use crate::detectors::patterns::PatternSet;
use crate::document::stats::is_numeric_line;
use crate::document::PageStats;

/// Why a page was classified as filler. Rules are checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerReason {
    NearEmpty,
    SparseLayout,
    IndexLayout,
    Heading,
    References,
}

pub(crate) struct FillerRules<'a> {
    pub config: &'a FillerConfig,
    pub headings: &'a [String],
    pub citations: &'a PatternSet,
    pub formulas: &'a PatternSet,
}

impl FillerRules<'_> {
    pub fn classify(&self, text: &str, stats: &PageStats) -> Option<FillerReason> {
        let config = self.config;

        if stats.char_count < config.min_chars || stats.word_count < config.min_words {
            return Some(FillerReason::NearEmpty);
        }

        // Contents pages: few words spread over many lines.
        if stats.word_count < config.max_sparse_words && stats.line_count > config.min_sparse_lines {
            return Some(FillerReason::SparseLayout);
        }

        if stats.non_empty_lines >= config.min_layout_lines
            && stats.short_line_ratio() >= config.short_line_ratio
            && self.entry_line_ratio(text, stats) >= config.numeric_line_ratio
        {
            return Some(FillerReason::IndexLayout);
        }

        if self.has_filler_heading(text) {
            return Some(FillerReason::Heading);
        }

        let citations = self.citations.count(text);
        if citations >= config.min_citations
            && stats.non_empty_lines > 0
            && citations as f64 / stats.non_empty_lines as f64 >= config.citation_line_ratio
        {
            return Some(FillerReason::References);
        }

        None
    }

    // Numeric lines that are not display equations such as "x = 2".
    fn entry_line_ratio(&self, text: &str, stats: &PageStats) -> f64 {
        if stats.non_empty_lines == 0 {
            return 0.0;
        }
        let equations = text
            .lines()
            .filter(|line| is_numeric_line(line) && self.formulas.count(line) > 0)
            .count();
        stats.numeric_lines.saturating_sub(equations) as f64 / stats.non_empty_lines as f64
    }

    // Only short leading lines count as headings, so prose that merely
    // mentions "index" or "references" is not affected.
    fn has_filler_heading(&self, text: &str) -> bool {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.config.heading_scan_lines)
            .filter(|line| line.split_whitespace().count() <= self.config.short_line_words)
            .map(normalize_heading)
            .any(|line| self.headings.iter().any(|h| heading_matches(&line, h)))
    }
}

// "3. References" -> "references", "INDEX" -> "index"
fn normalize_heading(line: &str) -> String {
    line.trim_start_matches(|c: char| c.is_ascii_digit() || c.is_ascii_punctuation() || c.is_whitespace())
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_lowercase()
}

// "appendix b.1" matches "appendix", "index theorem" does not match "index"
fn heading_matches(line: &str, heading: &str) -> bool {
    let heading = heading.to_lowercase();
    match line.strip_prefix(heading.as_str()) {
        Some("") => true,
        Some(rest) if rest.starts_with(char::is_whitespace) => {
            let label = rest.trim();
            !label.contains(char::is_whitespace) && label.chars().count() <= 3
        }
        _ => false,
    }
}
