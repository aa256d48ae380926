use regex::Regex;

use crate::config::ConfigError;

/// A set of alternatives compiled into one case-insensitive, multi-line regex.
/// An empty set never matches.
#[derive(Debug, Clone)]
pub struct PatternSet {
    regex: Option<Regex>,
}

impl PatternSet {
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        // Compile each alternative alone first so the error names the culprit.
        for pattern in patterns {
            Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }
        if patterns.is_empty() {
            return Ok(Self { regex: None });
        }

        let joined = patterns
            .iter()
            .map(|p| format!("(?:{p})"))
            .collect::<Vec<_>>()
            .join("|");
        let combined = format!("(?im){joined}");
        let regex = Regex::new(&combined).map_err(|source| ConfigError::InvalidPattern {
            pattern: combined.clone(),
            source,
        })?;
        Ok(Self { regex: Some(regex) })
    }

    /// Non-overlapping matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        match &self.regex {
            Some(regex) => regex.find_iter(text).count(),
            None => 0,
        }
    }
}

/// Matches per `chars_per_unit` characters (at least one unit), mapped onto
/// [0, 1] so that `saturation` matches per unit scores 1.0.
pub fn saturated_density(matches: usize, text: &str, chars_per_unit: f64, saturation: f64) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    let units = (text.chars().count() as f64 / chars_per_unit).max(1.0);
    let density = matches as f64 / units;
    (density / saturation).min(1.0)
}
