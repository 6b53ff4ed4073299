//! Dispatch state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions: the
//! session feeds events through [`transition`] and executes the resulting
//! effects itself.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::DispatchState;
pub use transition::{transition, TransitionError, TransitionResult, FALLBACK_REPLY};
