//! Mock alert feeds for testing polling and reconciliation.
//!
//! This crate provides mock implementations of the `AlertFeed` trait:
//! - `ScriptedFeed` - Replays queued bodies and counts fetches
//! - `DelayedFeed` - Wraps another feed with artificial latency
//!
//! For the real HTTP transport, use the `alert-client` crate instead.
//!
//! # Example
//!
//! ```rust
//! use alert_core::{parse_current_payload, Alert, AlertFeed};
//! use mock_feed::ScriptedFeed;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), alert_core::FeedError> {
//!     let feed = ScriptedFeed::new();
//!     feed.push_alert(&Alert::new("1", "1", "ירי רקטות", ["שדרות"]));
//!
//!     let body = feed.fetch_current().await?;
//!     assert!(parse_current_payload(&body).unwrap().is_some());
//!     assert_eq!(feed.fetch_current().await?, "null");
//!     Ok(())
//! }
//! ```

mod delayed;
mod scripted;

// Re-export alert-core types for convenience
pub use alert_core::{async_trait, Alert, AlertFeed, FeedError};

pub use delayed::DelayedFeed;
pub use scripted::ScriptedFeed;
