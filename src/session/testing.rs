//! Mock backends for session tests
//!
//! These enable testing the session without real I/O.

use super::SessionId;
use crate::backend::{AssistantBackend, BackendError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock backend that returns queued results
pub struct MockBackend {
    replies: Mutex<VecDeque<Result<String, BackendError>>>,
    /// Record of all `(user_input, thread_id)` pairs requested
    requests: Mutex<Vec<(String, String)>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
    }

    pub fn queue_error(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(BackendError::network(message)));
    }

    pub fn recorded_requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantBackend for MockBackend {
    async fn reply(
        &self,
        user_input: &str,
        thread_id: &SessionId,
    ) -> Result<String, BackendError> {
        self.requests
            .lock()
            .unwrap()
            .push((user_input.to_string(), thread_id.as_str().to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::network("no mock reply queued")))
    }
}

/// Mock backend that holds every request in flight until released
///
/// For busy-exclusion tests: `request_started` fires when a request is in
/// flight, `release` lets it resolve.
pub struct GatedBackend {
    inner: MockBackend,
    pub request_started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl GatedBackend {
    pub fn new() -> Self {
        Self {
            inner: MockBackend::new(),
            request_started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn queue_reply(&self, reply: impl Into<String>) {
        self.inner.queue_reply(reply);
    }

    pub fn recorded_requests(&self) -> Vec<(String, String)> {
        self.inner.recorded_requests()
    }
}

impl Default for GatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantBackend for GatedBackend {
    async fn reply(
        &self,
        user_input: &str,
        thread_id: &SessionId,
    ) -> Result<String, BackendError> {
        self.request_started.notify_one();
        self.release.notified().await;
        self.inner.reply(user_input, thread_id).await
    }
}
