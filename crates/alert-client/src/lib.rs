//! HTTP client for the live alerts server.
//!
//! This crate implements [`alert_core::AlertFeed`] over HTTP. It supports:
//!
//! - Fetching the raw current-alert body from `GET /api/alerts`
//! - Fetching the recent history list from `GET /api/history`
//!
//! # Example
//!
//! ```no_run
//! use alert_client::{AlertClient, ClientConfig};
//! use alert_core::{parse_current_payload, AlertFeed};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AlertClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//! let body = client.fetch_current().await?;
//! match parse_current_payload(&body) {
//!     Ok(Some(alert)) => println!("{}: {:?}", alert.title, alert.locations),
//!     _ => println!("no active alert"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::AlertClient;
pub use config::{ClientConfig, DEFAULT_REQUEST_TIMEOUT};
pub use error::ClientError;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
