//! Conversation transcript types
//!
//! The transcript is the ordered message history of one session. It is
//! append-only: messages are immutable once pushed, insertion order is the
//! conversation order, and nothing here performs I/O.

use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered message history for one session
///
/// Grows monotonically for the life of the session; never truncated or
/// reordered.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create the initial transcript: a single assistant greeting.
    pub fn seeded(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
        }
    }

    /// Append a user turn. The text is trimmed first; blank input is
    /// rejected without mutation.
    pub fn push_user(&mut self, text: &str) -> Option<&Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(Message::user(trimmed));
        self.messages.last()
    }

    /// Append an assistant turn verbatim.
    pub fn push_assistant(&mut self, text: impl Into<String>) -> &Message {
        self.messages.push(Message::assistant(text));
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[allow(dead_code)] // API completeness
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
