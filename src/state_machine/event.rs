//! Events that can occur in a session

/// Events that trigger dispatch state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User submitted input, typed or via a quick reply
    UserSubmit { text: String },

    /// The outstanding backend request resolved with an answer
    BackendReply { text: String },

    /// The outstanding backend request failed (network, non-2xx, or a
    /// malformed body; the machine does not distinguish)
    BackendFailed { error: String },
}
