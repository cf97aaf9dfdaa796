//! Generate response action for SignBot
//!
//! Answers questions about the recognition app from the installed catalog.

use super::{ActionExample, ActionResult};
use crate::interop::with_active_plugin;
use crate::types::SessionContext;

/// Action to answer a user question with the SignBot catalog.
pub struct GenerateResponseAction;

impl GenerateResponseAction {
    /// Returns the action name.
    pub fn name(&self) -> &'static str {
        "generate-response"
    }

    /// Returns action aliases.
    pub fn similes(&self) -> Vec<&'static str> {
        vec!["SIGNBOT_RESPOND", "SIGNBOT_CHAT", "SIGN_HELP"]
    }

    /// Returns the action description.
    pub fn description(&self) -> &'static str {
        "Answer a question about the sign language recognition app using SignBot's keyword catalog."
    }

    /// Validates whether this action should handle the message.
    pub fn validate(&self, _message_text: &str) -> bool {
        true
    }

    /// Handles the action and generates a response.
    pub fn handler(&self, user_input: &str, context: &SessionContext) -> ActionResult {
        if user_input.trim().is_empty() {
            return ActionResult {
                success: false,
                text: Some(
                    "Ask me anything about the project, its models or how to get started!"
                        .to_string(),
                ),
                suggestions: Vec::new(),
                error: Some("No user input provided".to_string()),
            };
        }

        let result = with_active_plugin(|p| p.generate_response(user_input, context));

        ActionResult {
            success: true,
            text: Some(result.response_text),
            suggestions: result.suggestions,
            error: None,
        }
    }

    /// Returns action examples.
    pub fn examples(&self) -> Vec<ActionExample> {
        vec![
            ActionExample {
                input: "Which models are available?".to_string(),
                output: "I'll walk you through the number, alphabet and word models.".to_string(),
            },
            ActionExample {
                input: "How do I improve accuracy?".to_string(),
                output: "I'll share some recognition tips.".to_string(),
            },
        ]
    }
}
