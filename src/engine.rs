//! Response selection.
//!
//! Input is normalized (lower-cased and trimmed) and run through the
//! pattern table. If no pattern fires, the input is compared with every
//! category key and the closest one above the similarity threshold is
//! used. Failing both, the catalog's fixed fallback text is returned.
//! Suggestions derived from the session context ride along either way.

#![allow(missing_docs)]

use std::collections::HashMap;

use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Result, SignBotError};
use crate::patterns::{Pattern, PatternMatcher};
use crate::similarity::closest_label;
use crate::suggestions::suggestions_for;
use crate::types::{EngineConfig, MatchResult, MatchStrategy, ResponseCategory, SessionContext};

lazy_static! {
    static ref TOGGLE_PLACEHOLDER: Regex =
        Regex::new(r"\{toggle\|([^|}]*)\|([^}]*)\}").expect("toggle placeholder regex");
}

/// Picks which of several response variants to use.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choice from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded generator; same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Always picks the same position, wrapped to the number of variants.
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Fills `{mode}`, `{MODE}` and `{toggle|on|off}` from the session.
pub fn render_template(template: &str, context: &SessionContext) -> String {
    if !template.contains('{') {
        return template.to_string();
    }
    let branch = if context.toggle_active { "$1" } else { "$2" };
    let mode = context.active_mode.as_str();
    TOGGLE_PLACEHOLDER
        .replace_all(template, branch)
        .replace("{MODE}", &mode.to_uppercase())
        .replace("{mode}", mode)
}

/// Lower-cases and trims input before matching.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Immutable intent engine. Safe to share between threads once built.
#[derive(Debug, Clone)]
pub struct IntentEngine {
    categories: Vec<ResponseCategory>,
    index: HashMap<String, usize>,
    matcher: PatternMatcher,
    fallback: String,
    greeting: String,
    threshold: f64,
}

impl IntentEngine {
    /// Validates the catalog and compiles its patterns.
    pub fn new(config: EngineConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(SignBotError::InvalidThreshold(config.threshold));
        }
        if config.categories.is_empty() {
            return Err(SignBotError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(config.categories.len());
        for (i, category) in config.categories.iter().enumerate() {
            if category.responses.is_empty() {
                return Err(SignBotError::EmptyCategory(category.key.clone()));
            }
            if index.insert(category.key.clone(), i).is_some() {
                return Err(SignBotError::DuplicateCategory(category.key.clone()));
            }
        }

        let mut patterns = Vec::with_capacity(config.patterns.len());
        for (i, spec) in config.patterns.iter().enumerate() {
            if !index.contains_key(&spec.category) {
                return Err(SignBotError::UnknownCategory {
                    pattern: i,
                    category: spec.category.clone(),
                });
            }
            patterns.push(Pattern::from_spec(spec)?);
        }

        info!(
            categories = config.categories.len(),
            patterns = patterns.len(),
            threshold = config.threshold,
            "Intent engine ready"
        );

        Ok(Self {
            categories: config.categories,
            index,
            matcher: PatternMatcher::new(patterns),
            fallback: config.fallback,
            greeting: config.greeting,
            threshold: config.threshold,
        })
    }

    pub fn categories(&self) -> &[ResponseCategory] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&ResponseCategory> {
        self.index.get(key).map(|&i| &self.categories[i])
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Matches `input` choosing variants with the thread-local generator.
    pub fn match_input(&self, input: &str, context: &SessionContext) -> MatchResult {
        self.match_with(input, context, &mut ThreadRandom)
    }

    /// Matches `input` choosing variants with the given random source.
    pub fn match_with(
        &self,
        input: &str,
        context: &SessionContext,
        rng: &mut dyn RandomSource,
    ) -> MatchResult {
        let normalized = normalize(input);
        let suggestions = suggestions_for(context);

        if let Some(pattern) = self.matcher.best_match(&normalized) {
            if let Some(&idx) = self.index.get(&pattern.category) {
                debug!(
                    category = %pattern.category,
                    weight = pattern.weight,
                    "Pattern match"
                );
                return self.respond_from(idx, MatchStrategy::Pattern, context, suggestions, rng);
            }
        }

        let labels = self.categories.iter().map(|c| c.key.as_str());
        if let Some((idx, score)) = closest_label(&normalized, labels, self.threshold) {
            debug!(
                category = %self.categories[idx].key,
                score,
                "Similarity match"
            );
            return self.respond_from(idx, MatchStrategy::Similarity, context, suggestions, rng);
        }

        debug!(input = %normalized, "No intent matched, using fallback");
        MatchResult {
            response_text: self.fallback.clone(),
            suggestions,
            category: None,
            strategy: MatchStrategy::Fallback,
        }
    }

    fn respond_from(
        &self,
        idx: usize,
        strategy: MatchStrategy,
        context: &SessionContext,
        suggestions: Vec<String>,
        rng: &mut dyn RandomSource,
    ) -> MatchResult {
        let category = &self.categories[idx];
        let variant = rng.pick(category.responses.len()) % category.responses.len();
        MatchResult {
            response_text: render_template(&category.responses[variant], context),
            suggestions,
            category: Some(category.key.clone()),
            strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OperatingMode, PatternSpec};

    fn category(key: &str, responses: &[&str]) -> ResponseCategory {
        ResponseCategory {
            key: key.to_string(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn pattern(category: &str, weight: f64, keywords: &[&str]) -> PatternSpec {
        PatternSpec {
            category: category.to_string(),
            weight,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn small_config() -> EngineConfig {
        EngineConfig {
            threshold: 0.4,
            fallback: "I can talk about greetings and weather.".to_string(),
            greeting: "Hi there".to_string(),
            categories: vec![
                category("greeting", &["Hello!", "Hey!"]),
                category("weather", &["Sunny in {mode} land.", "Mode {MODE}, {toggle|on|off}."]),
            ],
            patterns: vec![
                pattern("greeting", 0.9, &["hello", "hi"]),
                pattern("weather", 0.7, &["rain", "sun"]),
            ],
        }
    }

    #[test]
    fn test_pattern_path() {
        let engine = IntentEngine::new(small_config()).unwrap();
        let ctx = SessionContext::default();
        let result = engine.match_with("  HELLO  ", &ctx, &mut FixedIndex(1));
        assert_eq!(result.strategy, MatchStrategy::Pattern);
        assert_eq!(result.category.as_deref(), Some("greeting"));
        assert_eq!(result.response_text, "Hey!");
    }

    #[test]
    fn test_similarity_path() {
        let engine = IntentEngine::new(small_config()).unwrap();
        let ctx = SessionContext::default();
        let result = engine.match_with("wether", &ctx, &mut FixedIndex(0));
        assert_eq!(result.strategy, MatchStrategy::Similarity);
        assert_eq!(result.category.as_deref(), Some("weather"));
        assert_eq!(result.response_text, "Sunny in number land.");
    }

    #[test]
    fn test_fallback_path() {
        let engine = IntentEngine::new(small_config()).unwrap();
        let ctx = SessionContext::default();
        let result = engine.match_with("qqqq", &ctx, &mut FixedIndex(0));
        assert_eq!(result.strategy, MatchStrategy::Fallback);
        assert_eq!(result.category, None);
        assert_eq!(result.response_text, engine.fallback());
    }

    #[test]
    fn test_empty_input_falls_back() {
        let engine = IntentEngine::new(small_config()).unwrap();
        let result = engine.match_input("   ", &SessionContext::default());
        assert_eq!(result.strategy, MatchStrategy::Fallback);
        assert_eq!(result.suggestions.len(), 4);
    }

    #[test]
    fn test_fixed_index_wraps() {
        let mut rng = FixedIndex(5);
        assert_eq!(rng.pick(2), 1);
        assert_eq!(rng.pick(5), 0);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let engine = IntentEngine::new(small_config()).unwrap();
        let ctx = SessionContext::default();
        let run = |seed| {
            let mut rng = SeededRandom::new(seed);
            (0..20)
                .map(|_| engine.match_with("hi", &ctx, &mut rng).response_text)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
        for text in run(7) {
            assert!(text == "Hello!" || text == "Hey!");
        }
    }

    #[test]
    fn test_render_template() {
        let on = SessionContext::new(OperatingMode::Alphabet, true);
        let off = SessionContext::new(OperatingMode::Word, false);
        assert_eq!(render_template("Mode {MODE}, {toggle|on|off}.", &on), "Mode ALPHABET, on.");
        assert_eq!(render_template("Mode {mode}, {toggle|on|off}.", &off), "Mode word, off.");
        assert_eq!(render_template("a | b", &on), "a | b");
        assert_eq!(render_template("{toggle|Active|}", &off), "");
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let mut config = small_config();
        config.categories.clear();
        config.patterns.clear();
        assert!(matches!(IntentEngine::new(config), Err(SignBotError::EmptyCatalog)));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let mut config = small_config();
        config.patterns.push(pattern("jokes", 0.5, &["joke"]));
        match IntentEngine::new(config) {
            Err(SignBotError::UnknownCategory { pattern, category }) => {
                assert_eq!(pattern, 2);
                assert_eq!(category, "jokes");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_category() {
        let mut config = small_config();
        config.categories.push(category("empty", &[]));
        assert!(matches!(
            IntentEngine::new(config),
            Err(SignBotError::EmptyCategory(key)) if key == "empty"
        ));
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let mut config = small_config();
        config.categories.push(category("greeting", &["again"]));
        assert!(matches!(
            IntentEngine::new(config),
            Err(SignBotError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            let mut config = small_config();
            config.threshold = threshold;
            assert!(matches!(
                IntentEngine::new(config),
                Err(SignBotError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_weight() {
        let mut config = small_config();
        config.patterns[0].weight = 2.0;
        assert!(matches!(
            IntentEngine::new(config),
            Err(SignBotError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntentEngine>();
    }
}
