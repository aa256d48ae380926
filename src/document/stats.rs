use serde::{Deserialize, Serialize};

/// Layout counts of one page, used by the filler heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageStats {
    /// Characters after trimming surrounding whitespace.
    pub char_count: usize,
    /// Whitespace-separated tokens.
    pub word_count: usize,
    /// All lines, including blank ones.
    pub line_count: usize,
    pub non_empty_lines: usize,
    /// Non-empty lines with at most `short_line_words` words.
    pub short_lines: usize,
    /// Non-empty lines that end in a number or are mostly numeric tokens.
    /// Equation labels such as `(2.4)` are not numbers here.
    pub numeric_lines: usize,
}

impl PageStats {
    pub fn from_text(text: &str, short_line_words: usize) -> Self {
        let mut stats = PageStats {
            char_count: text.trim().chars().count(),
            word_count: text.split_whitespace().count(),
            line_count: text.lines().count(),
            ..PageStats::default()
        };

        for line in text.lines() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            stats.non_empty_lines += 1;
            if tokens.len() <= short_line_words {
                stats.short_lines += 1;
            }
            if numeric_tokens(&tokens) {
                stats.numeric_lines += 1;
            }
        }

        stats
    }

    pub fn short_line_ratio(&self) -> f64 {
        ratio(self.short_lines, self.non_empty_lines)
    }

    pub fn numeric_line_ratio(&self) -> f64 {
        ratio(self.numeric_lines, self.non_empty_lines)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Whether a line reads like a contents or index entry.
pub fn is_numeric_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    !tokens.is_empty() && numeric_tokens(&tokens)
}

// "Introduction .......... 12", "12", "3.4 Results 27"
fn numeric_tokens(tokens: &[&str]) -> bool {
    let ends_with_number = tokens
        .last()
        .map(|t| is_numeric_token(t))
        .unwrap_or(false);
    let numeric = tokens.iter().filter(|t| is_numeric_token(t)).count();
    ends_with_number || numeric * 2 > tokens.len()
}

fn is_numeric_token(token: &str) -> bool {
    if is_equation_label(token) {
        return false;
    }
    let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
    trimmed.chars().any(|c| c.is_ascii_digit())
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '–'))
}

// "(3)", "(2.4)", "(A.1)"
fn is_equation_label(token: &str) -> bool {
    let Some(inner) = token
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';'))
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
    else {
        return false;
    };
    inner.chars().any(|c| c.is_ascii_digit())
        && inner
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c.is_ascii_uppercase())
}
