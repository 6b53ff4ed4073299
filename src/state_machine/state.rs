//! Dispatch state types

/// Dispatch state for one session
///
/// `Pending` holds exclusively for the duration of one outstanding backend
/// call; completion (success or failure) always returns the machine to
/// `Idle`. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    /// Ready for user input, no request in flight
    #[default]
    Idle,

    /// One backend request in flight; new submissions are rejected
    Pending,
}

impl DispatchState {
    /// Check whether a request is currently in flight
    pub fn is_busy(self) -> bool {
        matches!(self, DispatchState::Pending)
    }
}
