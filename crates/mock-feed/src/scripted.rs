//! Scripted feed implementation - replays queued responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use alert_core::{async_trait, Alert, AlertFeed, FeedError};

#[derive(Debug)]
struct Script {
    current: VecDeque<Result<String, FeedError>>,
    fallback: String,
    history: Result<Vec<Alert>, FeedError>,
    current_calls: usize,
    history_calls: usize,
}

/// A feed that returns queued current-alert responses in order.
///
/// Once the queue is empty every call returns the fallback body, which
/// starts as `"null"`. Clones share the same script, so a test can keep a
/// handle and push responses while a monitor owns another.
#[derive(Debug, Clone)]
pub struct ScriptedFeed {
    script: Arc<Mutex<Script>>,
}

impl Default for ScriptedFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedFeed {
    /// Create a feed that reports no active alert and an empty history.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                current: VecDeque::new(),
                fallback: "null".to_string(),
                history: Ok(Vec::new()),
                current_calls: 0,
                history_calls: 0,
            })),
        }
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a raw body for the next current-alert fetch.
    pub fn push_body(&self, body: impl Into<String>) -> &Self {
        self.script().current.push_back(Ok(body.into()));
        self
    }

    /// Queue an alert, serialized the way the server sends it.
    pub fn push_alert(&self, alert: &Alert) -> &Self {
        // Alert holds only strings and bools, so this cannot fail.
        self.push_body(serde_json::to_string(alert).unwrap_or_default())
    }

    /// Queue a transport failure for the next current-alert fetch.
    pub fn push_error(&self, err: FeedError) -> &Self {
        self.script().current.push_back(Err(err));
        self
    }

    /// Body returned once the queue runs dry.
    pub fn set_fallback(&self, body: impl Into<String>) -> &Self {
        self.script().fallback = body.into();
        self
    }

    /// Set what every history fetch returns.
    pub fn set_history(&self, items: Vec<Alert>) -> &Self {
        self.script().history = Ok(items);
        self
    }

    /// Make every history fetch fail.
    pub fn fail_history(&self, err: FeedError) -> &Self {
        self.script().history = Err(err);
        self
    }

    /// Number of current-alert fetches made so far.
    pub fn current_calls(&self) -> usize {
        self.script().current_calls
    }

    /// Number of history fetches made so far.
    pub fn history_calls(&self) -> usize {
        self.script().history_calls
    }
}

#[async_trait]
impl AlertFeed for ScriptedFeed {
    async fn fetch_current(&self) -> Result<String, FeedError> {
        let mut script = self.script();
        script.current_calls += 1;
        match script.current.pop_front() {
            Some(response) => response,
            None => Ok(script.fallback.clone()),
        }
    }

    async fn fetch_history(&self) -> Result<Vec<Alert>, FeedError> {
        let mut script = self.script();
        script.history_calls += 1;
        script.history.clone()
    }

    fn name(&self) -> &str {
        "ScriptedFeed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alert_core::parse_current_payload;

    #[tokio::test]
    async fn test_queue_then_fallback() {
        let feed = ScriptedFeed::new();
        feed.push_body("\u{feff}null").push_error(FeedError::Status(500));

        assert_eq!(feed.fetch_current().await.unwrap(), "\u{feff}null");
        assert_eq!(feed.fetch_current().await, Err(FeedError::Status(500)));
        assert_eq!(feed.fetch_current().await.unwrap(), "null");
        assert_eq!(feed.current_calls(), 3);
    }

    #[tokio::test]
    async fn test_pushed_alert_round_trips() {
        let feed = ScriptedFeed::new();
        let alert = Alert::new("7", "1", "ירי רקטות", ["שדרות"]);
        feed.push_alert(&alert);

        let body = feed.fetch_current().await.unwrap();
        assert_eq!(parse_current_payload(&body).unwrap(), Some(alert));
    }

    #[tokio::test]
    async fn test_history_counts_and_failure() {
        let feed = ScriptedFeed::new();
        feed.set_history(vec![Alert::new("1", "1", "t", ["חיפה"])]);
        assert_eq!(feed.fetch_history().await.unwrap().len(), 1);

        feed.fail_history(FeedError::Http("down".into()));
        assert!(feed.fetch_history().await.is_err());
        assert_eq!(feed.history_calls(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let feed = ScriptedFeed::new();
        let handle = feed.clone();
        handle.set_fallback("{\"id\":\"x\"}");
        assert_eq!(feed.fetch_current().await.unwrap(), "{\"id\":\"x\"}");
        assert_eq!(handle.current_calls(), 1);
    }

    #[test]
    fn test_feed_name() {
        assert_eq!(ScriptedFeed::new().name(), "ScriptedFeed");
    }
}
