//! Assistant backend abstraction
//!
//! Provides a common interface for the remote assistant endpoint so the
//! session can be tested without real I/O.

mod error;
mod http;

pub use error::{BackendError, BackendErrorKind};
pub use http::HttpBackend;

use crate::session::SessionId;
use async_trait::async_trait;
use std::sync::Arc;

/// Common interface to the remote assistant
///
/// One call is one full request/response exchange. Implementations own any
/// timeout behavior; the session never cancels an issued request.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Ask the assistant for a reply to `user_input`, correlated to the
    /// session via `thread_id`.
    async fn reply(&self, user_input: &str, thread_id: &SessionId)
        -> Result<String, BackendError>;
}

#[async_trait]
impl<T: AssistantBackend + ?Sized> AssistantBackend for Arc<T> {
    async fn reply(
        &self,
        user_input: &str,
        thread_id: &SessionId,
    ) -> Result<String, BackendError> {
        (**self).reply(user_input, thread_id).await
    }
}

/// Logging wrapper for assistant backends
pub struct LoggingBackend<B> {
    inner: B,
}

impl<B: AssistantBackend> LoggingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: AssistantBackend> AssistantBackend for LoggingBackend<B> {
    async fn reply(
        &self,
        user_input: &str,
        thread_id: &SessionId,
    ) -> Result<String, BackendError> {
        let start = std::time::Instant::now();
        let result = self.inner.reply(user_input, thread_id).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    thread_id = %thread_id,
                    duration_ms = %duration.as_millis(),
                    reply_chars = reply.chars().count(),
                    "assistant request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    thread_id = %thread_id,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "assistant request failed"
                );
            }
        }

        result
    }
}
