//! Runtime configuration
//!
//! Everything the session needs from the deployment environment: where the
//! assistant backend lives, the transport timeout, and the view-layer
//! configuration data (greeting, quick-reply prompts).

use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_GREETING: &str = "Welcome to TTB Assistant. How can I help you today?";

/// Default quick-reply prompts, matching the assistant backend's fast-path
/// routing topics: loans, account opening, missing deposits, QR payment
/// issues.
const DEFAULT_QUICK_REPLIES: [&str; 4] = [
    "สินเชื่อ",
    "เปิดบัญชีอย่างไร",
    "ยอดเงินไม่เข้า",
    "สแกนจ่ายไม่ได้",
];

/// Configuration for one chat session
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base URL of the assistant backend (no trailing `/chat`)
    pub backend_url: String,
    /// Transport timeout for one request/response exchange
    pub request_timeout: Duration,
    /// Assistant greeting seeded into every new transcript
    pub greeting: String,
    /// Static quick-reply prompts rendered by the view
    pub quick_replies: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            greeting: DEFAULT_GREETING.to_string(),
            quick_replies: DEFAULT_QUICK_REPLIES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: std::env::var("FRONTDESK_BACKEND_URL")
                .unwrap_or(defaults.backend_url),
            request_timeout: std::env::var("FRONTDESK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.request_timeout, Duration::from_secs),
            greeting: std::env::var("FRONTDESK_GREETING").unwrap_or(defaults.greeting),
            quick_replies: defaults.quick_replies,
        }
    }
}
