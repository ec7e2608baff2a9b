//! Live-alert polling: reentrancy guard, deduplication and status.
//!
//! The poller does no I/O itself. The runtime asks [`Poller::try_begin`]
//! on every tick, runs the fetch if allowed, and hands the result back to
//! [`Poller::complete`], which decides whether anything changed.

use alert_core::{parse_current_payload, Alert, FeedError};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::status::ConnectionStatus;

/// Which source produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Live,
    Demo,
}

/// One unit of output from the poller or the demo simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationEvent {
    /// The new current alert, or `None` for "no active alert".
    pub alert: Option<Alert>,
    pub origin: Origin,
    /// Set when applying this event must end demo mode first.
    pub break_demo: bool,
}

impl ReconciliationEvent {
    /// A live update. Only a real alert may end demo mode; a live
    /// all-clear never does.
    pub fn live(alert: Option<Alert>) -> Self {
        Self {
            break_demo: alert.is_some(),
            alert,
            origin: Origin::Live,
        }
    }

    pub fn synthetic(alert: Option<Alert>) -> Self {
        Self {
            alert,
            origin: Origin::Demo,
            break_demo: false,
        }
    }
}

/// Deduplicating state machine for the current-alert endpoint.
#[derive(Debug, Default)]
pub struct Poller {
    /// Identity of the last emitted alert; `None` is the "no alert" identity.
    last_seen: Option<String>,
    in_flight: bool,
    status: ConnectionStatus,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the reentrancy guard.
    ///
    /// Returns false while a previous fetch is outstanding; the tick is
    /// then dropped, never queued.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    /// Identity of the last emitted alert.
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Reset the identity to "no alert".
    ///
    /// Called when demo mode starts or stops so that a live alert which is
    /// still active gets emitted again on the next poll.
    pub fn forget_last_seen(&mut self) {
        self.last_seen = None;
    }

    /// Finish a fetch and release the guard.
    ///
    /// Returns an event only when the parsed identity differs from the last
    /// one seen. Transport failures flip the status to error and leave the
    /// identity alone. Malformed bodies count as "no active alert".
    pub fn complete(
        &mut self,
        result: Result<String, FeedError>,
        now: DateTime<Utc>,
    ) -> Option<ReconciliationEvent> {
        self.in_flight = false;

        let body = match result {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Alert poll failed");
                self.status.mark_error();
                return None;
            }
        };
        self.status.mark_connected(now);

        let alert = match parse_current_payload(&body) {
            Ok(alert) => alert,
            Err(e) => {
                debug!(error = %e, "Malformed alert payload, treating as no alert");
                None
            }
        };

        let identity = alert.as_ref().map(|a| a.id.as_str());
        if identity == self.last_seen.as_deref() {
            debug!(alert_id = ?identity, "Alert unchanged");
            return None;
        }

        match &alert {
            Some(a) => info!(alert_id = %a.id, title = %a.title, "New live alert"),
            None => info!("Live alert cleared"),
        }
        self.last_seen = alert.as_ref().map(|a| a.id.clone());
        Some(ReconciliationEvent::live(alert))
    }
}
