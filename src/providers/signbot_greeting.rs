//! SignBot Greeting Provider
//!
//! Provides the welcome message and the opening suggestions.

use super::{ProviderContext, ProviderResult};
use crate::interop::with_active_plugin;
use crate::suggestions::welcome_suggestions;

/// Provider for the SignBot welcome message.
pub struct SignBotGreetingProvider;

impl SignBotGreetingProvider {
    /// Returns the provider name.
    pub fn name(&self) -> &'static str {
        "signbot-greeting"
    }

    /// Returns the provider description.
    pub fn description(&self) -> &'static str {
        "Provides the SignBot greeting message."
    }

    /// Gets the provider data.
    pub fn get(&self, _context: &ProviderContext) -> ProviderResult {
        let greeting = with_active_plugin(|p| p.get_greeting());
        let suggestions = welcome_suggestions();

        ProviderResult {
            text: greeting.clone(),
            values: serde_json::json!({
                "greeting": greeting
            }),
            data: serde_json::json!({
                "greeting": greeting,
                "suggestions": suggestions
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signbot_greeting_provider() {
        let provider = SignBotGreetingProvider;
        let result = provider.get(&ProviderContext::default());

        assert!(result.text.contains("SignBot"));
        assert!(result.values["greeting"].as_str().unwrap().contains("SignBot"));
        assert_eq!(result.data["suggestions"][0], "About Project");
        assert_eq!(result.data["suggestions"][3], "Features");
    }

    #[test]
    fn test_provider_metadata() {
        let provider = SignBotGreetingProvider;
        assert_eq!(provider.name(), "signbot-greeting");
        assert!(provider.description().contains("greeting"));
    }
}
