use serde::{Deserialize, Serialize};

use crate::config::{ensure_positive, ensure_unit_ratio, ConfigError};

const FORMULA_PATTERNS: &[&str] = &[
    r"[∫∑∏∂∇±≤≥≠≈√∞]",
    r"[α-ωΑ-Ω]",
    r"\b[a-zA-Z]\s*[=<>≤≥]\s*[0-9a-zA-Z+\-*/^]+",
    r"\([a-zA-Z0-9+\-*/^]+\)\s*[+\-*/^]",
    r"\b\d+\s*[×·]\s*\d+",
    r"\b[a-zA-Z]\^\d+",
    r"\\\w+\{[^}]*\}",
    r"\$[^$]+\$",
];

const DEFINITION_PATTERNS: &[&str] = &[
    r"\bis\s+defined\s+as\b",
    r"\brefers\s+to\b",
    r"\bknown\s+as\b",
    r"\bcalled\b",
    r"\bdenotes\b",
    r"\brepresents\b",
    r"\bmeans\b",
    r"\b(?:Definition|Theorem|Lemma|Corollary|Proposition)[:.]",
    r"\bwhere\s+\w+\s+is\b",
    r"(?-i:^\s*[A-Z][\w\- ]{1,40}:\s+[a-z]\w+\s+\w+)",
];

const CITATION_PATTERNS: &[&str] = &[
    r"\[\d+(?:\s*[,\-–]\s*\d+)*\]",
    r"\bet\s+al\.?",
    r"\(\d{4}[a-z]?\)",
    r"\b(?:doi|arxiv):\s*\S+",
    r"\bpp\.\s*\d+",
    r"\bvol\.\s*\d+",
    r"https?://\S+",
];

const FILLER_HEADINGS: &[&str] = &[
    "table of contents",
    "contents",
    "references",
    "bibliography",
    "index",
    "appendix",
    "acknowledgments",
    "acknowledgements",
    "preface",
    "about the author",
];

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

/// Pattern sets and constants of the pattern layer.
/// Patterns are matched case-insensitively in multi-line mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub formula_patterns: Vec<String>,
    pub definition_patterns: Vec<String>,
    pub citation_patterns: Vec<String>,
    pub filler_headings: Vec<String>,
    /// Match counts are expressed per this many characters (minimum one unit).
    pub chars_per_unit: f64,
    /// Matches per unit at which the formula score reaches 1.0.
    pub formula_saturation: f64,
    /// Matches per unit at which the definition score reaches 1.0.
    pub definition_saturation: f64,
    pub vocabulary: VocabularyConfig,
    pub filler: FillerConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            formula_patterns: owned(FORMULA_PATTERNS),
            definition_patterns: owned(DEFINITION_PATTERNS),
            citation_patterns: owned(CITATION_PATTERNS),
            filler_headings: owned(FILLER_HEADINGS),
            chars_per_unit: 1000.0,
            formula_saturation: 10.0,
            definition_saturation: 5.0,
            vocabulary: VocabularyConfig::default(),
            filler: FillerConfig::default(),
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("chars_per_unit", self.chars_per_unit)?;
        ensure_positive("formula_saturation", self.formula_saturation)?;
        ensure_positive("definition_saturation", self.definition_saturation)?;
        self.vocabulary.validate()?;
        self.filler.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Words shorter than this are dropped before counting. A page made only
    /// of shorter words scores 0.0.
    pub min_word_chars: usize,
    /// Pages with fewer words score 0.0.
    pub min_words: usize,
    /// Type-token ratio mapped to 1.0. With 1.0 the score is the plain ratio.
    pub reference_ratio: f64,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            min_word_chars: 3,
            min_words: 1,
            reference_ratio: 1.0,
        }
    }
}

impl VocabularyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_word_chars == 0 {
            return Err(ConfigError::InvalidDetectorSetting(
                "vocabulary.min_word_chars must be at least 1".into(),
            ));
        }
        ensure_positive("vocabulary.reference_ratio", self.reference_ratio)?;
        ensure_unit_ratio("vocabulary.reference_ratio", self.reference_ratio)
    }
}

/// Thresholds of the filler heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerConfig {
    /// Near-empty: fewer trimmed characters than this.
    pub min_chars: usize,
    /// Near-empty: fewer words than this.
    pub min_words: usize,
    /// Sparse layout: fewer words than this spread over more than `min_sparse_lines` lines.
    pub max_sparse_words: usize,
    pub min_sparse_lines: usize,
    /// A line with at most this many words counts as short.
    pub short_line_words: usize,
    /// Index/TOC layout needs at least this many non-empty lines.
    pub min_layout_lines: usize,
    pub short_line_ratio: f64,
    pub numeric_line_ratio: f64,
    /// How many leading non-empty lines are checked for filler headings.
    pub heading_scan_lines: usize,
    pub min_citations: usize,
    /// Citations per non-empty line at which a page reads as a bibliography.
    pub citation_line_ratio: f64,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            min_chars: 100,
            min_words: 15,
            max_sparse_words: 50,
            min_sparse_lines: 20,
            short_line_words: 6,
            min_layout_lines: 5,
            short_line_ratio: 0.6,
            numeric_line_ratio: 0.5,
            heading_scan_lines: 3,
            min_citations: 5,
            citation_line_ratio: 0.5,
        }
    }
}

impl FillerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure_unit_ratio("filler.short_line_ratio", self.short_line_ratio)?;
        ensure_unit_ratio("filler.numeric_line_ratio", self.numeric_line_ratio)?;
        ensure_positive("filler.citation_line_ratio", self.citation_line_ratio)
    }
}
