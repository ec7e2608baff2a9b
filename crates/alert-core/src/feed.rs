//! The AlertFeed trait definition.

use async_trait::async_trait;

use crate::alert::Alert;
use crate::error::FeedError;

/// A source of live alert data.
///
/// Implementations range from the HTTP client to scripted test feeds.
/// This trait is object-safe and can be used with `Arc<dyn AlertFeed>`.
#[async_trait]
pub trait AlertFeed: Send + Sync {
    /// Fetch the raw body of the current-alert endpoint.
    ///
    /// The body is returned untouched; trimming and parsing are the
    /// poller's job so that a malformed body is never an error here.
    async fn fetch_current(&self) -> Result<String, FeedError>;

    /// Fetch the recent alert history, newest first.
    async fn fetch_history(&self) -> Result<Vec<Alert>, FeedError>;

    /// Get a human-readable name for this feed implementation.
    fn name(&self) -> &str;
}
