//! Pure state transition function
//!
//! The transition function is pure: given the same state and event it always
//! produces the same result, with no I/O side effects. The session executes
//! the returned effects.

use super::{DispatchState, Effect, Event};
use thiserror::Error;

/// Fixed assistant text shown in place of a real reply when a dispatch
/// fails. Failures are absorbed into transcript content; the user never
/// sees a raw error.
pub const FALLBACK_REPLY: &str = "Service temporarily unavailable.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: DispatchState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: DispatchState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Rejected transitions
///
/// `Busy` and `EmptyInput` are the spec'd no-ops: the session logs them at
/// debug and drops the submission without any state change.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("a request is already in flight, submission dropped")]
    Busy,
    #[error("empty or whitespace-only input, submission dropped")]
    EmptyInput,
    #[error("invalid transition: {0}")]
    Invalid(String),
}

/// Pure transition function
pub fn transition(
    state: DispatchState,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Submission: guard, optimistic append, lock, request
        // ============================================================
        (_, Event::UserSubmit { text }) if text.trim().is_empty() => {
            Err(TransitionError::EmptyInput)
        }

        (DispatchState::Idle, Event::UserSubmit { text }) => {
            let trimmed = text.trim().to_string();
            Ok(TransitionResult::new(DispatchState::Pending)
                .with_effect(Effect::append_user(trimmed.clone()))
                .with_effect(Effect::ClearInput)
                .with_effect(Effect::request_backend(trimmed)))
        }

        // At most one in-flight request: reject, never queue
        (DispatchState::Pending, Event::UserSubmit { .. }) => Err(TransitionError::Busy),

        // ============================================================
        // Completion: unconditional return to Idle on both paths
        // ============================================================
        (DispatchState::Pending, Event::BackendReply { text }) => {
            Ok(TransitionResult::new(DispatchState::Idle)
                .with_effect(Effect::append_assistant(text)))
        }

        (DispatchState::Pending, Event::BackendFailed { error }) => {
            Ok(TransitionResult::new(DispatchState::Idle)
                .with_effect(Effect::append_assistant(FALLBACK_REPLY))
                .with_effect(Effect::RecordFailure { error }))
        }

        (state, event) => Err(TransitionError::Invalid(format!(
            "no transition from {state:?} with event {event:?}"
        ))),
    }
}
