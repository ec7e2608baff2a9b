//! Runtime for the live alert client.
//!
//! This crate turns two event sources into one stream of state changes:
//!
//! - [`Poller`] - Polls the current-alert endpoint with a reentrancy guard and
//!   deduplicates by alert identity
//! - [`DemoSimulator`] - Replays canned alerts on a timer until a genuine
//!   alert interrupts it
//! - [`Controller`] - Decides which events reach the [`AlertStore`] and keeps
//!   the map layer in sync
//! - [`AlertMonitor`] - Owns the three timers and drives everything from a
//!   single task
//!
//! # Example
//!
//! ```no_run
//! use alert_map::{MarkerRenderer, RecordingSurface};
//! use alert_monitor::{AlertMonitor, MonitorCommand, MonitorConfig, Silent};
//! use mock_feed::ScriptedFeed;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (monitor, handle) = AlertMonitor::new(
//!     ScriptedFeed::new(),
//!     MarkerRenderer::new(RecordingSurface::new()),
//!     Box::new(Silent),
//!     Box::new(Silent),
//!     MonitorConfig::default(),
//! );
//! let task = tokio::spawn(monitor.run());
//!
//! handle.send(MonitorCommand::LoadDemo).await?;
//! println!("{:?}", handle.snapshot().active);
//!
//! handle.send(MonitorCommand::Shutdown).await?;
//! task.await??;
//! # Ok(())
//! # }
//! ```
//!
//! [`AlertStore`]: alert_core::AlertStore

mod controller;
mod demo;
mod error;
mod monitor;
mod notifier;
mod poller;
mod status;

pub use controller::{Controller, Outcome};
pub use demo::{DemoSimulator, DEFAULT_DEMO_INTERVAL};
pub use error::MonitorError;
pub use monitor::{
    AlertMonitor, MonitorCommand, MonitorConfig, MonitorHandle, MonitorSnapshot,
    DEFAULT_HISTORY_INTERVAL, DEFAULT_POLL_INTERVAL,
};
pub use notifier::{notification_text, AudioCue, Notifier, Permission, Silent};
pub use poller::{Origin, Poller, ReconciliationEvent};
pub use status::{ConnectionState, ConnectionStatus};
