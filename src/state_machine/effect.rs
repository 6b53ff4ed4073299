//! Effects produced by state transitions

/// Effects to be executed by the session after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a user turn to the transcript (already trimmed)
    AppendUser { text: String },

    /// Tell the view to clear its input buffer
    ClearInput,

    /// Issue the backend request for this prompt
    RequestBackend { text: String },

    /// Append an assistant turn to the transcript
    AppendAssistant { text: String },

    /// Record a dispatch failure on the session's last-error flag
    RecordFailure { error: String },
}

impl Effect {
    pub fn append_user(text: impl Into<String>) -> Self {
        Effect::AppendUser { text: text.into() }
    }

    pub fn append_assistant(text: impl Into<String>) -> Self {
        Effect::AppendAssistant { text: text.into() }
    }

    pub fn request_backend(text: impl Into<String>) -> Self {
        Effect::RequestBackend { text: text.into() }
    }
}
