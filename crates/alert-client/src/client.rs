//! Alerts server HTTP client.

use alert_core::{async_trait, parse_history_payload, Alert, AlertFeed, FeedError};
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Client for the `/api/alerts` and `/api/history` endpoints.
#[derive(Clone)]
pub struct AlertClient {
    http: Client,
    config: ClientConfig,
}

impl AlertClient {
    /// Build a client for the given server.
    ///
    /// No request is made; connectivity shows up in the first poll.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.base_url.is_empty() {
            return Err(ClientError::Config("base URL is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { http, config })
    }

    /// Fetch the raw body of the current-alert endpoint.
    pub async fn current_body(&self) -> Result<String, ClientError> {
        let body = self.get_text(&self.config.alerts_url()).await?;
        debug!(bytes = body.len(), "Fetched current alert body");
        Ok(body)
    }

    /// Fetch and decode the history list.
    pub async fn history(&self) -> Result<Vec<Alert>, ClientError> {
        let body = self.get_text(&self.config.history_url()).await?;
        let items = parse_history_payload(&body)?;
        debug!(count = items.len(), "Fetched alert history");
        Ok(items)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_text(&self, url: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl AlertFeed for AlertClient {
    async fn fetch_current(&self) -> Result<String, FeedError> {
        self.current_body().await.map_err(FeedError::from)
    }

    async fn fetch_history(&self) -> Result<Vec<Alert>, FeedError> {
        self.history().await.map_err(FeedError::from)
    }

    fn name(&self) -> &str {
        "AlertClient"
    }
}

impl std::fmt::Debug for AlertClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertClient")
            .field("config", &self.config)
            .finish()
    }
}
