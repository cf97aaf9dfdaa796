//! Follow-up prompts shown under each bot reply.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::SessionContext;

/// Suggestions attached to the welcome message when a chat first opens.
pub const WELCOME_SUGGESTIONS: [&str; 4] = ["About Project", "Get Started", "Models", "Features"];

const ONBOARDING: [&str; 4] = ["🚀 Get Started", "❓ About Project", "🎯 Models", "⚡ Features"];

lazy_static! {
    static ref DECORATION: Regex =
        Regex::new("[🎥📝💡🔄❓🚀⚡🎯📊]").expect("decoration class is a valid regex");
}

/// Suggestions for the given session. While recognition is running they
/// focus on the active mode, otherwise they walk a new user through the
/// basics.
pub fn suggestions_for(context: &SessionContext) -> Vec<String> {
    if context.toggle_active {
        vec![
            "🎥 How to improve accuracy?".to_string(),
            format!("📝 About {} model", context.active_mode),
            "💡 Pro tips".to_string(),
            "🔄 Switch models".to_string(),
        ]
    } else {
        ONBOARDING.iter().map(|s| s.to_string()).collect()
    }
}

/// The opening suggestions, in display order.
pub fn welcome_suggestions() -> Vec<String> {
    WELCOME_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Strips the decorative emoji from a suggestion so it can be sent back
/// as a question.
pub fn clean_suggestion(suggestion: &str) -> String {
    DECORATION.replace_all(suggestion, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperatingMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_onboarding_when_idle() {
        for mode in [OperatingMode::Number, OperatingMode::Alphabet, OperatingMode::Word] {
            let got = suggestions_for(&SessionContext::new(mode, false));
            assert_eq!(got, vec!["🚀 Get Started", "❓ About Project", "🎯 Models", "⚡ Features"]);
        }
    }

    #[test]
    fn test_active_mode_suggestions() {
        let got = suggestions_for(&SessionContext::new(OperatingMode::Word, true));
        assert_eq!(
            got,
            vec![
                "🎥 How to improve accuracy?",
                "📝 About word model",
                "💡 Pro tips",
                "🔄 Switch models",
            ]
        );
        assert!(got[1].contains("word"));
    }

    #[test]
    fn test_stable_across_calls() {
        let ctx = SessionContext::new(OperatingMode::Alphabet, true);
        assert_eq!(suggestions_for(&ctx), suggestions_for(&ctx));
    }

    #[test]
    fn test_welcome_suggestions() {
        assert_eq!(
            welcome_suggestions(),
            vec!["About Project", "Get Started", "Models", "Features"]
        );
    }

    #[test]
    fn test_clean_suggestion() {
        assert_eq!(clean_suggestion("❓ About Project"), "About Project");
        assert_eq!(clean_suggestion("🎥 How to improve accuracy?"), "How to improve accuracy?");
        assert_eq!(clean_suggestion("plain text"), "plain text");
    }
}
