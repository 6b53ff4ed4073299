//! HTTP assistant backend
//!
//! Talks to the remote assistant's `POST /chat` endpoint. The request
//! carries the raw trimmed user text and the session token; the response
//! body's `response` field is used verbatim as the assistant's message.

use super::{AssistantBackend, BackendError};
use crate::config::ChatConfig;
use crate::session::SessionId;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Assistant backend over HTTP
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &ChatConfig) -> Self {
        let endpoint = format!("{}/chat", config.backend_url.trim_end_matches('/'));

        // Bounded wait lives here in the transport layer; the session
        // itself enforces no timeout.
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, endpoint }
    }

    #[allow(dead_code)] // Exercised by the wire tests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    async fn reply(
        &self,
        user_input: &str,
        thread_id: &SessionId,
    ) -> Result<String, BackendError> {
        let request = ChatRequest {
            user_input,
            thread_id: thread_id.as_str(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    BackendError::network(format!("Connection failed: {e}"))
                } else {
                    BackendError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(BackendError::status(format!("HTTP {status}: {body}")));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            BackendError::malformed(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        // The original backend also reports its routing decision and token
        // accounting; useful in logs, never shown to the user.
        tracing::debug!(
            thread_id = %thread_id,
            decision = ?parsed.decision,
            metadata = ?parsed.metadata,
            "assistant response received"
        );

        Ok(parsed.response)
    }
}

// Wire types for the /chat exchange

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    user_input: &'a str,
    thread_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
    #[serde(default)]
    decision: Option<String>,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}
