//! A feed that answers slowly.

use std::time::Duration;

use alert_core::{async_trait, Alert, AlertFeed, FeedError};
use tokio::time::sleep;

/// Wraps a feed and holds each response back before forwarding it.
///
/// A current-alert response slower than the poll interval is what makes
/// timer ticks land while a poll is still outstanding. History can be held
/// back for a different span, so the two request paths can be told apart.
pub struct DelayedFeed<F: AlertFeed> {
    inner: F,
    current_delay: Duration,
    history_delay: Duration,
}

impl<F: AlertFeed> DelayedFeed<F> {
    /// Hold back both endpoints for the same span.
    pub fn new(inner: F, delay: Duration) -> Self {
        Self {
            inner,
            current_delay: delay,
            history_delay: delay,
        }
    }

    pub fn with_millis(inner: F, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Use a separate delay for history fetches.
    pub fn history_delay(mut self, delay: Duration) -> Self {
        self.history_delay = delay;
        self
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait]
impl<F: AlertFeed> AlertFeed for DelayedFeed<F> {
    async fn fetch_current(&self) -> Result<String, FeedError> {
        sleep(self.current_delay).await;
        self.inner.fetch_current().await
    }

    async fn fetch_history(&self) -> Result<Vec<Alert>, FeedError> {
        sleep(self.history_delay).await;
        self.inner.fetch_history().await
    }

    fn name(&self) -> &str {
        "DelayedFeed"
    }
}
