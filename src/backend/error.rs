//! Backend error types

use thiserror::Error;

/// Backend error with classification
///
/// The classification exists for logs and tests; the dispatch layer absorbs
/// every kind uniformly into the fallback reply.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Network, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Status, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Malformed, message)
    }
}

/// Where along the exchange the failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Transport-level failure: connect error, timeout, broken body read
    Network,
    /// Non-success HTTP status
    Status,
    /// Body was not the expected `{"response": ...}` shape
    Malformed,
}
