#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default similarity threshold for the fuzzy fallback.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.4;

/// Recognition model currently selected by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    #[default]
    Number,
    Alphabet,
    Word,
}

impl OperatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Number => "number",
            OperatingMode::Alphabet => "alphabet",
            OperatingMode::Word => "word",
        }
    }

    /// Parses a mode name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "number" => Some(OperatingMode::Number),
            "alphabet" => Some(OperatingMode::Alphabet),
            "word" => Some(OperatingMode::Word),
            _ => None,
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call view of the host's state. Never retained by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    #[serde(default)]
    pub active_mode: OperatingMode,
    #[serde(default)]
    pub toggle_active: bool,
}

impl SessionContext {
    pub fn new(active_mode: OperatingMode, toggle_active: bool) -> Self {
        Self {
            active_mode,
            toggle_active,
        }
    }
}

/// Which stage of the engine produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStrategy {
    Pattern,
    Similarity,
    Fallback,
}

/// The engine's answer to a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub response_text: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub strategy: MatchStrategy,
}

/// A named bucket of interchangeable responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCategory {
    pub key: String,
    pub responses: Vec<String>,
}

/// Declarative form of a keyword pattern, as stored in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub category: String,
    pub weight: f64,
    pub keywords: Vec<String>,
}

/// Everything an engine is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    pub fallback: String,
    #[serde(default)]
    pub greeting: String,
    pub categories: Vec<ResponseCategory>,
    #[serde(default)]
    pub patterns: Vec<PatternSpec>,
}

fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl EngineConfig {
    /// Parses a catalog from JSON. Structural checks happen when the
    /// engine is built.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a catalog file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
