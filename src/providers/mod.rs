//! SignBot providers
//!
//! Provides context data for SignBot interactions.

mod signbot_greeting;
mod signbot_suggestions;

pub use signbot_greeting::SignBotGreetingProvider;
pub use signbot_suggestions::SignBotSuggestionsProvider;

use serde_json::Value;

use crate::types::SessionContext;

/// Provider context containing runtime information.
#[derive(Debug, Clone, Default)]
pub struct ProviderContext {
    /// The agent identifier
    pub agent_id: Option<String>,
    /// The room identifier
    pub room_id: Option<String>,
    /// Recognition state of the host app
    pub session: SessionContext,
}

/// Provider result structure
#[derive(Debug, Clone)]
pub struct ProviderResult {
    /// Human-readable text
    pub text: String,
    /// Key-value pairs
    pub values: Value,
    /// Structured data
    pub data: Value,
}

/// Names of all available providers.
pub fn provider_names() -> Vec<&'static str> {
    vec![SignBotGreetingProvider.name(), SignBotSuggestionsProvider.name()]
}

/// Runs the provider called `name`, if there is one.
pub fn get_provider(name: &str, context: &ProviderContext) -> Option<ProviderResult> {
    match name {
        "signbot-greeting" => Some(SignBotGreetingProvider.get(context)),
        "signbot-suggestions" => Some(SignBotSuggestionsProvider.get(context)),
        _ => None,
    }
}
