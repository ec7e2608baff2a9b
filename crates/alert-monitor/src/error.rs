//! Error types for the monitor runtime.

use thiserror::Error;

/// Errors from running or talking to an [`AlertMonitor`](crate::AlertMonitor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    /// Every handle was dropped without sending `Shutdown`.
    #[error("command channel closed")]
    CommandsClosed,

    /// The monitor is no longer running.
    #[error("monitor stopped")]
    Stopped,
}
