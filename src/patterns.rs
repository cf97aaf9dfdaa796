//! Weighted keyword patterns.
//!
//! Each pattern is a word-boundary keyword alternation that votes for one
//! response category with a fixed weight. All patterns are tested; the
//! highest weight wins and, on equal weights, the one declared first.

#![allow(missing_docs)]

use regex::Regex;

use crate::error::{Result, SignBotError};
use crate::types::PatternSpec;

/// A compiled keyword pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub matcher: Regex,
    pub category: String,
    pub weight: f64,
}

impl Pattern {
    /// Builds `\b(?:k1|k2|...)\b` from the given keywords. Keywords are
    /// matched literally and lower-cased.
    pub fn from_keywords<S: AsRef<str>>(category: &str, weight: f64, keywords: &[S]) -> Result<Self> {
        if !(weight > 0.0 && weight <= 1.0) {
            return Err(SignBotError::InvalidWeight {
                category: category.to_string(),
                weight,
            });
        }
        let alternation = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .map(|k| regex::escape(&k))
            .collect::<Vec<_>>();
        if alternation.is_empty() {
            return Err(SignBotError::EmptyPattern(category.to_string()));
        }
        let matcher = Regex::new(&format!(r"\b(?:{})\b", alternation.join("|")))?;
        Ok(Self {
            matcher,
            category: category.to_string(),
            weight,
        })
    }

    pub fn from_spec(spec: &PatternSpec) -> Result<Self> {
        Self::from_keywords(&spec.category, spec.weight, &spec.keywords)
    }

    pub fn is_match(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }
}

/// Ordered pattern table.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    patterns: Vec<Pattern>,
}

impl PatternMatcher {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Returns the strongest pattern that fires on `normalized`, if any.
    pub fn best_match(&self, normalized: &str) -> Option<&Pattern> {
        let mut best: Option<&Pattern> = None;
        for pattern in &self.patterns {
            if !pattern.is_match(normalized) {
                continue;
            }
            match best {
                Some(current) if pattern.weight <= current.weight => {}
                _ => best = Some(pattern),
            }
        }
        best
    }
}
