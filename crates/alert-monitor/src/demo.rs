//! Demo playback of canned alerts on a timer.

use std::time::Duration;

use alert_core::{demo, Alert};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::poller::ReconciliationEvent;

/// Default time between demo alerts.
pub const DEFAULT_DEMO_INTERVAL: Duration = Duration::from_secs(4);

/// Cycles through the demo catalog, one synthetic event per tick.
///
/// The timer lives inside the simulator while it is active. Stopping drops
/// it on the spot, so a tick can never be delivered after `stop()` returns.
#[derive(Debug)]
pub struct DemoSimulator {
    catalog: &'static [Alert],
    period: Duration,
    index: usize,
    timer: Option<Interval>,
}

impl DemoSimulator {
    pub fn new(period: Duration) -> Self {
        Self {
            catalog: demo::catalog(),
            period,
            index: 0,
            timer: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Position of the alert last emitted.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Start from the first canned alert and arm the timer.
    ///
    /// Restarting while active drops the old timer and begins again at
    /// index 0. Must be called within a tokio runtime.
    pub fn start(&mut self) -> ReconciliationEvent {
        if self.timer.is_some() {
            debug!("Restarting demo");
        }
        let mut timer = interval_at(Instant::now() + self.period, self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.timer = Some(timer);
        self.index = 0;

        info!(count = self.catalog.len(), "Demo started");
        self.current()
    }

    /// Cancel the timer. Safe to call when inactive.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            info!(index = self.index, "Demo stopped");
        }
    }

    /// Wait for the next tick and emit the following canned alert.
    ///
    /// Pending forever while inactive, so it can sit in a `select!`.
    /// Cancel safe.
    pub async fn next_tick(&mut self) -> ReconciliationEvent {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
        self.index = (self.index + 1) % self.catalog.len().max(1);
        debug!(index = self.index, "Demo advanced");
        self.current()
    }

    fn current(&self) -> ReconciliationEvent {
        ReconciliationEvent::synthetic(self.catalog.get(self.index).cloned())
    }
}

impl Default for DemoSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_DEMO_INTERVAL)
    }
}
