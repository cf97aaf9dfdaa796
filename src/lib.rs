//! # SignBot Plugin
//!
//! A rule-based assistant for the sign language recognition app. Free-form
//! questions are mapped to one of a fixed set of answer categories in two
//! stages:
//!
//! 1. Weighted keyword patterns. Every pattern is tested and the heaviest
//!    one that fires wins; equal weights go to the pattern declared first.
//! 2. Fuzzy fallback. When nothing fires, the input is compared with each
//!    category name by normalized edit distance and the closest one above
//!    the similarity threshold is used.
//!
//! If neither stage finds a category, a fixed overview of what the bot can
//! answer is returned. Every reply carries follow-up suggestions based on
//! the current recognition mode and whether recognition is running.
//!
//! ## Features
//!
//! - Catalog-driven patterns and responses (`shared/signbot.json`)
//! - Fail-fast catalog validation
//! - Injectable random source for reproducible variant choice
//! - Context placeholders in responses (`{mode}`, `{MODE}`, `{toggle|on|off}`)
//!
//! ## Example
//!
//! ```rust
//! use elizaos_plugin_signbot::{OperatingMode, SessionContext, SignBotPlugin};
//!
//! let bot = SignBotPlugin::new();
//! let ctx = SessionContext::new(OperatingMode::Word, true);
//! let reply = bot.generate_response("what models are available", &ctx);
//! assert_eq!(reply.category.as_deref(), Some("models"));
//! assert!(reply.suggestions[1].contains("word"));
//! ```

#![warn(missing_docs)]

pub mod actions;
pub mod catalog;
pub mod conversation;
pub mod distance;
pub mod engine;
pub mod error;
pub mod interop;
pub mod patterns;
pub mod providers;
pub mod similarity;
pub mod suggestions;
pub mod types;

pub use conversation::{ChatMessage, ConversationLog, Sender};
pub use engine::{FixedIndex, IntentEngine, RandomSource, SeededRandom, ThreadRandom};
pub use error::{Result, SignBotError};
pub use types::{
    EngineConfig, MatchResult, MatchStrategy, OperatingMode, PatternSpec, ResponseCategory,
    SessionContext,
};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_ENGINE: IntentEngine =
        catalog::build_default_engine().expect("bundled signbot.json must be valid");
    static ref SPEAKER_LINE: Regex =
        Regex::new(r"(?im)^[ \t]*(?:User|Human|You):[ \t]*(.+?)[ \t]*$").expect("speaker regex");
}

/// Pulls the user's line out of a chat-formatted prompt ("User: ...").
/// Plain text is returned trimmed.
pub fn extract_user_message(prompt: &str) -> String {
    if let Some(caps) = SPEAKER_LINE.captures(prompt) {
        if let Some(m) = caps.get(1) {
            return m.as_str().trim().to_string();
        }
    }
    prompt.trim().to_string()
}

/// The SignBot plugin.
///
/// Wraps an [`IntentEngine`]; the engine is immutable, so one plugin can
/// serve any number of sessions at once.
#[derive(Debug, Clone)]
pub struct SignBotPlugin {
    engine: IntentEngine,
}

impl Default for SignBotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl SignBotPlugin {
    /// Creates a plugin backed by the bundled SignBot catalog.
    pub fn new() -> Self {
        Self {
            engine: DEFAULT_ENGINE.clone(),
        }
    }

    /// Creates a plugin from a custom catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`SignBotError`] when the catalog is empty, a category has
    /// no responses, or a pattern is invalid or points at a missing
    /// category.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            engine: IntentEngine::new(config)?,
        })
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &IntentEngine {
        &self.engine
    }

    /// Answers `input` for the given session.
    pub fn generate_response(&self, input: &str, context: &SessionContext) -> MatchResult {
        self.engine.match_input(input, context)
    }

    /// Returns the welcome message shown when a chat opens.
    pub fn get_greeting(&self) -> String {
        self.engine.greeting().to_string()
    }
}

/// Answers `input` with the bundled catalog.
pub fn generate_response(input: &str, context: &SessionContext) -> MatchResult {
    DEFAULT_ENGINE.match_input(input, context)
}

/// Returns the bundled welcome message.
pub fn get_greeting() -> String {
    DEFAULT_ENGINE.greeting().to_string()
}
