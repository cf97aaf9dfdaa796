//! Chat transcript kept by the host.
//!
//! The engine never touches this; it only ever sees the latest input.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use crate::suggestions::welcome_suggestions;
use crate::types::MatchResult;

/// Text shown after the transcript is wiped.
pub const CLEARED_MESSAGE: &str = "Conversation cleared! 🧹 How can I help you now?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Append-only list of exchanged messages plus a count of user questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
    total_questions: u64,
    next_id: u64,
}

impl ConversationLog {
    /// Starts a transcript with the bot's welcome message.
    pub fn new(welcome: &str, suggestions: Vec<String>) -> Self {
        let mut log = Self::default();
        log.push(Sender::Bot, welcome.to_string(), suggestions);
        log
    }

    /// Starts a transcript with `greeting` and the standard opening
    /// suggestions.
    pub fn with_greeting(greeting: &str) -> Self {
        Self::new(greeting, welcome_suggestions())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn total_questions(&self) -> u64 {
        self.total_questions
    }

    pub fn push_user(&mut self, text: &str) -> &ChatMessage {
        self.total_questions += 1;
        self.push(Sender::User, text.to_string(), Vec::new())
    }

    pub fn push_bot(&mut self, result: &MatchResult) -> &ChatMessage {
        self.push(
            Sender::Bot,
            result.response_text.clone(),
            result.suggestions.clone(),
        )
    }

    /// Drops every message, leaving a single "cleared" note, and resets the
    /// question count.
    pub fn clear(&mut self, suggestions: Vec<String>) {
        self.messages.clear();
        self.total_questions = 0;
        self.next_id = 0;
        self.push(Sender::Bot, CLEARED_MESSAGE.to_string(), suggestions);
    }

    fn push(&mut self, sender: Sender, text: String, suggestions: Vec<String>) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            text,
            suggestions,
        });
        &self.messages[self.messages.len() - 1]
    }
}
