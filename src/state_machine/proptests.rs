//! Property-based tests for the dispatch state machine
//!
//! These verify the spec-level invariants hold across all possible inputs:
//! the busy guard never queues, blank input never transitions, and every
//! completion lands back in Idle.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = DispatchState> {
    prop_oneof![Just(DispatchState::Idle), Just(DispatchState::Pending)]
}

/// Whitespace-only strings, including empty
fn arb_blank() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Text with at least one non-whitespace character, possibly padded
fn arb_prompt() -> impl Strategy<Value = String> {
    ("[ \t]{0,3}", "[a-zA-Z0-9\u{0e01}-\u{0e2e}?][a-zA-Z0-9 \u{0e01}-\u{0e2e}?]{0,30}", "[ \t]{0,3}")
        .prop_map(|(lead, body, tail)| format!("{lead}{body}{tail}"))
}

fn arb_completion() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_prompt().prop_map(|text| Event::BackendReply { text }),
        arb_prompt().prop_map(|error| Event::BackendFailed { error }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Blank input is a no-op from every state.
    #[test]
    fn blank_submit_never_transitions(state in arb_state(), text in arb_blank()) {
        let result = transition(state, Event::UserSubmit { text });
        prop_assert!(matches!(result, Err(TransitionError::EmptyInput)));
    }

    /// While pending, every non-blank submission is dropped, never queued.
    #[test]
    fn pending_rejects_every_submission(text in arb_prompt()) {
        let result = transition(DispatchState::Pending, Event::UserSubmit { text });
        prop_assert!(matches!(result, Err(TransitionError::Busy)));
    }

    /// An accepted submission locks the machine and produces exactly the
    /// optimistic-append / clear-input / request effects, with the same
    /// trimmed text in the append and the request.
    #[test]
    fn accepted_submit_effects_are_exact(text in arb_prompt()) {
        let trimmed = text.trim().to_string();
        let result = transition(DispatchState::Idle, Event::UserSubmit { text }).unwrap();

        prop_assert_eq!(result.new_state, DispatchState::Pending);
        prop_assert_eq!(result.effects, vec![
            Effect::append_user(trimmed.clone()),
            Effect::ClearInput,
            Effect::request_backend(trimmed),
        ]);
    }

    /// Every completion event, success or failure, returns the machine to
    /// Idle and appends exactly one assistant turn.
    #[test]
    fn completion_always_unlocks(event in arb_completion()) {
        let result = transition(DispatchState::Pending, event.clone()).unwrap();

        prop_assert_eq!(result.new_state, DispatchState::Idle);
        let appended: Vec<&Effect> = result
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::AppendAssistant { .. }))
            .collect();
        prop_assert_eq!(appended.len(), 1);

        match (event, appended[0]) {
            (Event::BackendReply { text }, Effect::AppendAssistant { text: shown }) => {
                prop_assert_eq!(&text, shown);
            }
            (Event::BackendFailed { .. }, Effect::AppendAssistant { text: shown }) => {
                prop_assert_eq!(shown, FALLBACK_REPLY);
            }
            _ => prop_assert!(false, "unexpected effect shape"),
        }
    }

    /// Completion events outside Pending are invalid; the machine never
    /// appends an assistant turn it does not owe.
    #[test]
    fn stray_completion_is_invalid(event in arb_completion()) {
        let result = transition(DispatchState::Idle, event);
        prop_assert!(matches!(result, Err(TransitionError::Invalid(_))));
    }
}
