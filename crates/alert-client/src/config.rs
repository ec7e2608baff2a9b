//! Configuration types for alert-client.

use std::time::Duration;

/// Path of the current-alert endpoint.
const ALERTS_PATH: &str = "/api/alerts";

/// Path of the history endpoint.
const HISTORY_PATH: &str = "/api/history";

/// Default request timeout, matching the upstream fetcher.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Configuration for connecting to the alerts server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the alerts server (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Get the current-alert endpoint URL.
    pub fn alerts_url(&self) -> String {
        format!("{}{}", self.base_url, ALERTS_PATH)
    }

    /// Get the history endpoint URL.
    pub fn history_url(&self) -> String {
        format!("{}{}", self.base_url, HISTORY_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8080")
    }
}
