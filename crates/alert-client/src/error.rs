//! Error types for alert-client.

use alert_core::{FeedError, PayloadError};
use thiserror::Error;

/// Errors that can occur when talking to the alerts server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The body could not be decoded.
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ClientError> for FeedError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) if e.is_decode() => FeedError::Decode(e.to_string()),
            ClientError::Http(e) => FeedError::Http(e.to_string()),
            ClientError::Status(code) => FeedError::Status(code),
            ClientError::Payload(e) => FeedError::Decode(e.to_string()),
            ClientError::Config(msg) => FeedError::Http(msg),
        }
    }
}
