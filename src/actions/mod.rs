//! SignBot actions
//!
//! Provides action implementations for the SignBot assistant.

mod generate_response;

pub use generate_response::GenerateResponseAction;

/// Action result structure
#[derive(Debug, Clone)]
pub struct ActionResult {
    /// Whether the action succeeded
    pub success: bool,
    /// Response text
    pub text: Option<String>,
    /// Follow-up suggestions for the reply
    pub suggestions: Vec<String>,
    /// Error message if failed
    pub error: Option<String>,
}

/// Action example for documentation
pub struct ActionExample {
    /// Example input
    pub input: String,
    /// Example output
    pub output: String,
}

/// Returns all available actions.
pub fn get_actions() -> Vec<GenerateResponseAction> {
    vec![GenerateResponseAction]
}
