//! Conversation session manager
//!
//! Owns the session identity, transcript, and dispatch state for one
//! conversation, and drives the request/response cycle against the
//! assistant backend. All failure is absorbed here: `submit` never returns
//! an error, it only produces transcript content.

#[cfg(test)]
pub mod testing;

use crate::backend::AssistantBackend;
use crate::config::ChatConfig;
use crate::state_machine::{transition, DispatchState, Effect, Event, TransitionResult};
use crate::transcript::{Message, Transcript};
use std::fmt;
use tokio::sync::{broadcast, Mutex};

/// Opaque token correlating all turns of one conversation for the backend
///
/// Generated once per session and immutable thereafter; sent verbatim as
/// `thread_id` on every dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(format!("session-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Events broadcast to view observers
#[derive(Debug, Clone)]
pub enum SessionNotice {
    /// A message was appended to the transcript
    MessageAppended { message: Message },
    /// The dispatch state changed
    StateChanged { busy: bool },
    /// The view should clear its input buffer
    InputCleared,
}

/// Mutable session state, guarded by one lock
#[derive(Debug)]
struct SessionInner {
    transcript: Transcript,
    state: DispatchState,
    last_error: Option<String>,
}

/// Manager for one conversation session
///
/// Single-threaded in spirit: the busy guard is checked synchronously
/// before the sole suspension point (the backend call), so no two
/// dispatches ever run concurrently.
pub struct ChatSession<B> {
    id: SessionId,
    backend: B,
    inner: Mutex<SessionInner>,
    notices: broadcast::Sender<SessionNotice>,
}

impl<B: AssistantBackend> ChatSession<B> {
    pub fn new(backend: B, config: &ChatConfig) -> Self {
        let (notices, _) = broadcast::channel(64);
        Self {
            id: SessionId::generate(),
            backend,
            inner: Mutex::new(SessionInner {
                transcript: Transcript::seeded(&config.greeting),
                state: DispatchState::default(),
                last_error: None,
            }),
            notices,
        }
    }

    /// The session identity; stable for the life of this value.
    pub fn session_id(&self) -> &SessionId {
        &self.id
    }

    /// Subscribe to view notices.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionNotice> {
        self.notices.subscribe()
    }

    /// Snapshot of the transcript in conversation order.
    pub async fn transcript(&self) -> Vec<Message> {
        self.inner.lock().await.transcript.messages().to_vec()
    }

    pub async fn is_busy(&self) -> bool {
        self.inner.lock().await.state.is_busy()
    }

    /// The most recent dispatch failure, cleared on the next accepted
    /// submission.
    pub async fn last_error(&self) -> Option<String> {
        self.inner.lock().await.last_error.clone()
    }

    /// Submit user input, typed or from a quick reply.
    ///
    /// Guard violations (blank input, request already in flight) are
    /// silent no-ops. Every accepted submission appends exactly one
    /// `(user, assistant)` pair: the user turn optimistically, the
    /// assistant turn when the request resolves, with the fallback text
    /// standing in on failure.
    pub async fn submit(&self, text: &str) {
        let prompt = {
            let mut inner = self.inner.lock().await;
            let event = Event::UserSubmit {
                text: text.to_string(),
            };
            match transition(inner.state, event) {
                Ok(result) => self.apply(&mut inner, result),
                Err(reason) => {
                    tracing::debug!(session_id = %self.id, %reason, "submission dropped");
                    return;
                }
            }
        };
        let Some(prompt) = prompt else {
            return;
        };

        // Sole suspension point. The state stays Pending until the request
        // resolves; there is no cancellation and no timeout here.
        let event = match self.backend.reply(&prompt, &self.id).await {
            Ok(reply) => Event::BackendReply { text: reply },
            Err(err) => Event::BackendFailed {
                error: err.to_string(),
            },
        };

        let mut inner = self.inner.lock().await;
        match transition(inner.state, event) {
            Ok(result) => {
                self.apply(&mut inner, result);
            }
            // Unreachable while this submit holds Pending
            Err(reason) => {
                tracing::error!(session_id = %self.id, %reason, "completion rejected");
            }
        }
    }

    /// Execute transition effects, then adopt the new state. Returns the
    /// backend prompt if the transition requested a dispatch.
    fn apply(&self, inner: &mut SessionInner, result: TransitionResult) -> Option<String> {
        let mut request = None;

        for effect in result.effects {
            match effect {
                Effect::AppendUser { text } => {
                    inner.last_error = None;
                    if let Some(message) = inner.transcript.push_user(&text) {
                        let _ = self.notices.send(SessionNotice::MessageAppended {
                            message: message.clone(),
                        });
                    }
                }
                Effect::ClearInput => {
                    let _ = self.notices.send(SessionNotice::InputCleared);
                }
                Effect::RequestBackend { text } => {
                    request = Some(text);
                }
                Effect::AppendAssistant { text } => {
                    let message = inner.transcript.push_assistant(text).clone();
                    let _ = self
                        .notices
                        .send(SessionNotice::MessageAppended { message });
                }
                Effect::RecordFailure { error } => {
                    tracing::warn!(
                        session_id = %self.id,
                        error = %error,
                        "dispatch failed, fallback reply shown"
                    );
                    inner.last_error = Some(error);
                }
            }
        }

        if inner.state != result.new_state {
            inner.state = result.new_state;
            let _ = self.notices.send(SessionNotice::StateChanged {
                busy: inner.state.is_busy(),
            });
        }

        request
    }
}
