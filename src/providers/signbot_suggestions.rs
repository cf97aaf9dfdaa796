//! SignBot Suggestions Provider

use super::{ProviderContext, ProviderResult};
use crate::suggestions::suggestions_for;

/// Provider for the context-aware follow-up prompts.
pub struct SignBotSuggestionsProvider;

impl SignBotSuggestionsProvider {
    /// Returns the provider name.
    pub fn name(&self) -> &'static str {
        "signbot-suggestions"
    }

    /// Returns the provider description.
    pub fn description(&self) -> &'static str {
        "Provides follow-up suggestions for the current recognition mode."
    }

    /// Gets the provider data.
    pub fn get(&self, context: &ProviderContext) -> ProviderResult {
        let suggestions = suggestions_for(&context.session);

        ProviderResult {
            text: suggestions.join("\n"),
            values: serde_json::json!({
                "activeMode": context.session.active_mode,
                "toggleActive": context.session.toggle_active
            }),
            data: serde_json::json!({
                "suggestions": suggestions
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OperatingMode, SessionContext};

    #[test]
    fn test_suggestions_follow_session() {
        let provider = SignBotSuggestionsProvider;
        let context = ProviderContext {
            session: SessionContext::new(OperatingMode::Number, true),
            ..ProviderContext::default()
        };
        let result = provider.get(&context);

        assert_eq!(result.values["activeMode"], "number");
        assert_eq!(result.data["suggestions"][1], "📝 About number model");
        assert_eq!(result.text.lines().count(), 4);
    }
}
