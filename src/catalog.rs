#![allow(missing_docs)]

use crate::engine::IntentEngine;
use crate::error::Result;
use crate::types::EngineConfig;

/// The bundled SignBot catalog, shared with the TypeScript plugin.
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../shared/signbot.json");

pub fn load_default_config() -> Result<EngineConfig> {
    EngineConfig::from_json(DEFAULT_CATALOG_JSON)
}

pub fn build_default_engine() -> Result<IntentEngine> {
    IntentEngine::new(load_default_config()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_basic_integrity() {
        let config = load_default_config().unwrap();
        assert_eq!(config.threshold, 0.4);
        assert_eq!(config.categories.len(), 12);
        assert_eq!(config.patterns.len(), 12);
        assert!(!config.fallback.is_empty());
        assert!(config.greeting.contains("SignBot"));
        assert!(config.categories.iter().all(|c| !c.responses.is_empty()));
    }

    #[test]
    fn test_pattern_targets_exist() {
        let config = load_default_config().unwrap();
        let keys: HashSet<&str> = config.categories.iter().map(|c| c.key.as_str()).collect();
        let missing: Vec<&str> = config
            .patterns
            .iter()
            .map(|p| p.category.as_str())
            .filter(|k| !keys.contains(k))
            .collect();
        assert!(missing.is_empty(), "missing pattern targets: {:?}", missing);
    }

    #[test]
    fn test_category_order() {
        let config = load_default_config().unwrap();
        let keys: Vec<&str> = config.categories.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "greeting",
                "about",
                "usecase",
                "how",
                "models",
                "features",
                "start",
                "tech",
                "accuracy",
                "troubleshoot",
                "tips",
                "system",
            ]
        );
    }

    #[test]
    fn test_weights_preserved() {
        let config = load_default_config().unwrap();
        let weights: Vec<(&str, f64)> = config
            .patterns
            .iter()
            .map(|p| (p.category.as_str(), p.weight))
            .collect();
        assert_eq!(weights[0], ("greeting", 0.9));
        assert_eq!(weights[1], ("about", 0.95));
        assert_eq!(weights[4], ("models", 0.95));
        assert_eq!(weights[11], ("system", 0.8));
    }

    #[test]
    fn test_default_engine_builds() {
        let engine = build_default_engine().unwrap();
        assert_eq!(engine.categories().len(), 12);
        assert_eq!(engine.matcher().patterns().len(), 12);
    }
}
