//! The runtime loop that owns every timer and all client state.

use std::sync::Arc;
use std::time::Duration;

use alert_core::view::{self, ActiveAlertView, HistoryEntryView};
use alert_core::{Alert, AlertFeed, FeedError, RegionId};
use alert_map::AlertLayer;
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::controller::{Controller, Outcome};
use crate::demo::{DemoSimulator, DEFAULT_DEMO_INTERVAL};
use crate::error::MonitorError;
use crate::notifier::{AudioCue, Notifier};
use crate::poller::Poller;
use crate::status::ConnectionState;

/// Default time between polls of the current-alert endpoint.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default time between history refreshes.
pub const DEFAULT_HISTORY_INTERVAL: Duration = Duration::from_secs(60);

const COMMAND_BUFFER: usize = 32;

/// Timer cadences and initial region.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub poll_interval: Duration,
    pub demo_interval: Duration,
    pub history_interval: Duration,
    /// Region selected at startup.
    pub region: RegionId,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            demo_interval: DEFAULT_DEMO_INTERVAL,
            history_interval: DEFAULT_HISTORY_INTERVAL,
            region: RegionId::All,
        }
    }
}

/// User actions accepted by a running monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorCommand {
    SelectRegion(RegionId),
    LoadDemo,
    StopDemo,
    /// Centre the map on a location and open its popup.
    Focus(String),
    ToggleSound,
    Resize,
    Shutdown,
}

/// Everything a front end needs to draw, published after each change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSnapshot {
    pub status: ConnectionState,
    pub status_text: &'static str,
    pub last_update: Option<DateTime<Utc>>,
    pub demo_active: bool,
    pub sound_on: bool,
    pub region: RegionId,
    /// The current alert card, `None` when there is no active alert.
    pub active: Option<ActiveAlertView>,
    /// Current-alert locations shown under the region.
    pub active_count: usize,
    pub history: Vec<HistoryEntryView>,
}

impl Default for MonitorSnapshot {
    fn default() -> Self {
        Self {
            status: ConnectionState::Connecting,
            status_text: ConnectionState::Connecting.text(),
            last_update: None,
            demo_active: false,
            sound_on: true,
            region: RegionId::All,
            active: None,
            active_count: 0,
            history: Vec::new(),
        }
    }
}

/// Sends commands to a running monitor and reads its snapshots.
#[derive(Debug, Clone)]
pub struct MonitorHandle {
    commands: mpsc::Sender<MonitorCommand>,
    snapshots: watch::Receiver<MonitorSnapshot>,
}

impl MonitorHandle {
    pub async fn send(&self, command: MonitorCommand) -> Result<(), MonitorError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| MonitorError::Stopped)
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> MonitorSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every new snapshot.
    pub fn subscribe(&self) -> watch::Receiver<MonitorSnapshot> {
        self.snapshots.clone()
    }
}

/// Polls a feed, plays the demo, and keeps a map layer in sync.
///
/// All state lives in this value and is only touched from [`run`], so no
/// locks are needed. Fetches run as spawned tasks; their results are
/// applied in completion order.
///
/// [`run`]: AlertMonitor::run
pub struct AlertMonitor<F, L> {
    feed: Arc<F>,
    config: MonitorConfig,
    poller: Poller,
    demo: DemoSimulator,
    controller: Controller<L>,
    commands: mpsc::Receiver<MonitorCommand>,
    snapshots: watch::Sender<MonitorSnapshot>,
}

impl<F, L> AlertMonitor<F, L>
where
    F: AlertFeed + 'static,
    L: AlertLayer + 'static,
{
    pub fn new(
        feed: F,
        layer: L,
        notifier: Box<dyn Notifier>,
        audio: Box<dyn AudioCue>,
        config: MonitorConfig,
    ) -> (Self, MonitorHandle) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(MonitorSnapshot {
            region: config.region,
            ..Default::default()
        });

        let monitor = Self {
            feed: Arc::new(feed),
            poller: Poller::new(),
            demo: DemoSimulator::new(config.demo_interval),
            controller: Controller::new(layer, notifier, audio, config.region),
            config,
            commands: command_rx,
            snapshots: snapshot_tx,
        };
        let handle = MonitorHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        };
        (monitor, handle)
    }

    /// Run until [`MonitorCommand::Shutdown`] arrives.
    ///
    /// Returns [`MonitorError::CommandsClosed`] if every handle is dropped
    /// first. Outstanding fetches are aborted on exit.
    pub async fn run(mut self) -> Result<(), MonitorError> {
        info!(
            feed = self.feed.name(),
            poll_ms = self.config.poll_interval.as_millis() as u64,
            "Starting alert monitor"
        );
        self.controller.request_notification_permission();
        self.publish();

        let mut poll_timer = interval(self.config.poll_interval);
        poll_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut history_timer = interval(self.config.history_interval);
        history_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut poll_task: Option<JoinHandle<Result<String, FeedError>>> = None;
        let mut history_tasks: JoinSet<Result<Vec<Alert>, FeedError>> = JoinSet::new();

        let result = loop {
            tokio::select! {
                _ = poll_timer.tick() => {
                    if self.poller.try_begin() {
                        let feed = Arc::clone(&self.feed);
                        poll_task = Some(tokio::spawn(async move { feed.fetch_current().await }));
                    } else {
                        debug!("Previous poll still in flight, skipping tick");
                    }
                }
                result = join_poll(&mut poll_task) => {
                    if let Some(event) = self.poller.complete(result, Utc::now()) {
                        let outcome = self.controller.reconcile(event, &mut self.demo);
                        if outcome == Outcome::RefreshHistory {
                            self.spawn_history(&mut history_tasks);
                        }
                    }
                    self.publish();
                }
                event = self.demo.next_tick() => {
                    self.controller.reconcile(event, &mut self.demo);
                    self.publish();
                }
                _ = history_timer.tick() => {
                    self.spawn_history(&mut history_tasks);
                }
                Some(joined) = history_tasks.join_next() => {
                    let items = match joined {
                        Ok(Ok(items)) => items,
                        Ok(Err(e)) => {
                            warn!(error = %e, "History fetch failed");
                            Vec::new()
                        }
                        Err(e) => {
                            warn!(error = %e, "History task failed");
                            Vec::new()
                        }
                    };
                    self.controller.set_history(items);
                    self.publish();
                }
                command = self.commands.recv() => match command {
                    Some(MonitorCommand::Shutdown) => break Ok(()),
                    Some(command) => {
                        self.handle(command);
                        self.publish();
                    }
                    None => break Err(MonitorError::CommandsClosed),
                },
            }
        };

        if let Some(task) = poll_task {
            task.abort();
        }
        history_tasks.abort_all();
        self.demo.stop();
        info!("Alert monitor stopped");
        result
    }

    fn handle(&mut self, command: MonitorCommand) {
        debug!(command = ?command, "Handling command");
        match command {
            MonitorCommand::SelectRegion(region) => self.controller.select_region(region),
            MonitorCommand::LoadDemo => {
                self.poller.forget_last_seen();
                self.controller.start_demo(&mut self.demo);
            }
            MonitorCommand::StopDemo => {
                if self.demo.is_active() {
                    self.poller.forget_last_seen();
                    self.controller.stop_demo(&mut self.demo);
                }
            }
            MonitorCommand::Focus(location) => self.controller.focus(&location),
            MonitorCommand::ToggleSound => {
                self.controller.toggle_sound();
            }
            MonitorCommand::Resize => self.controller.resize(),
            MonitorCommand::Shutdown => {}
        }
    }

    fn spawn_history(&self, tasks: &mut JoinSet<Result<Vec<Alert>, FeedError>>) {
        let feed = Arc::clone(&self.feed);
        tasks.spawn(async move { feed.fetch_history().await });
    }

    fn snapshot(&self) -> MonitorSnapshot {
        let store = self.controller.store();
        let region = self.controller.region();
        let status = self.poller.status();
        MonitorSnapshot {
            status: status.state(),
            status_text: status.text(),
            last_update: status.last_update(),
            demo_active: self.demo.is_active(),
            sound_on: self.controller.sound_on(),
            region,
            active: ActiveAlertView::from_store(store, region),
            active_count: view::active_count(store, region),
            history: view::history_entries(store, region, Utc::now()),
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}

/// Wait for the in-flight poll, pending forever when there is none.
///
/// The slot is emptied once the task finishes so a finished handle is
/// never polled again. A panicked or aborted task counts as a transport
/// failure.
async fn join_poll(
    task: &mut Option<JoinHandle<Result<String, FeedError>>>,
) -> Result<String, FeedError> {
    let Some(handle) = task.as_mut() else {
        return std::future::pending().await;
    };
    let result = match handle.await {
        Ok(result) => result,
        Err(e) => Err(FeedError::Aborted(e.to_string())),
    };
    *task = None;
    result
}
