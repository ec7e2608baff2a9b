//! Error types for feed and payload handling.

use thiserror::Error;

/// Errors that can occur while fetching from an alert feed.
///
/// Every variant is treated the same way by the poller: the connection is
/// marked as failed and the next tick retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The fetch task was cancelled or panicked before completing.
    #[error("fetch aborted: {0}")]
    Aborted(String),
}

/// A body from the current-alert endpoint that is not a valid alert.
///
/// Never surfaced past the poller; a malformed body reads as "no alert".
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The body is not valid alert JSON.
    #[error("malformed alert payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body parsed but carries no identity.
    #[error("alert payload has an empty id")]
    MissingId,
}
