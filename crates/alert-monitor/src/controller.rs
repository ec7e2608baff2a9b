//! Reconciliation policy: turns poller and demo events into store updates.

use alert_core::{Alert, AlertStore, RegionId};
use alert_map::AlertLayer;
use tracing::{debug, info};

use crate::demo::DemoSimulator;
use crate::notifier::{notification_text, AudioCue, Notifier, Permission};
use crate::poller::{Origin, ReconciliationEvent};

/// What the controller did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dropped: a live "no alert" while the demo runs.
    Dropped,
    /// Applied to the store.
    Applied,
    /// Applied, and the history list must be refetched.
    RefreshHistory,
}

/// Sole writer of the [`AlertStore`] and driver of the map layer.
pub struct Controller<L> {
    store: AlertStore,
    layer: L,
    region: RegionId,
    sound_on: bool,
    notifier: Box<dyn Notifier>,
    audio: Box<dyn AudioCue>,
}

impl<L: AlertLayer> Controller<L> {
    pub fn new(
        layer: L,
        notifier: Box<dyn Notifier>,
        audio: Box<dyn AudioCue>,
        region: RegionId,
    ) -> Self {
        Self {
            store: AlertStore::new(),
            layer,
            region,
            sound_on: true,
            notifier,
            audio,
        }
    }

    pub fn store(&self) -> &AlertStore {
        &self.store
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn region(&self) -> RegionId {
        self.region
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    /// Ask for notification permission if the user has not decided yet.
    pub fn request_notification_permission(&mut self) {
        if self.notifier.permission() == Permission::Default {
            let decision = self.notifier.request_permission();
            info!(permission = ?decision, "Notification permission requested");
        }
    }

    /// Apply one event according to whether the demo is running.
    ///
    /// A live event flagged `break_demo` stops the demo before it is applied,
    /// so a synthetic and a live alert are never current together.
    pub fn reconcile(&mut self, event: ReconciliationEvent, demo: &mut DemoSimulator) -> Outcome {
        if !demo.is_active() {
            let refresh = event.alert.is_some();
            self.apply(event.alert);
            return if refresh {
                Outcome::RefreshHistory
            } else {
                Outcome::Applied
            };
        }

        match event.origin {
            Origin::Demo => {
                self.apply(event.alert);
                Outcome::Applied
            }
            Origin::Live if event.break_demo && event.alert.is_some() => {
                demo.stop();
                info!("Live alert interrupted demo");
                self.apply(event.alert);
                Outcome::RefreshHistory
            }
            Origin::Live => {
                debug!(
                    has_alert = event.alert.is_some(),
                    "Ignoring live update while demo is running"
                );
                Outcome::Dropped
            }
        }
    }

    /// Start (or restart) the demo and show its first alert.
    pub fn start_demo(&mut self, demo: &mut DemoSimulator) {
        let event = demo.start();
        self.reconcile(event, demo);
    }

    /// Stop a running demo and clear the synthetic alert it left behind.
    pub fn stop_demo(&mut self, demo: &mut DemoSimulator) {
        if !demo.is_active() {
            return;
        }
        demo.stop();
        self.apply(None);
    }

    pub fn set_history(&mut self, items: Vec<Alert>) {
        debug!(count = items.len(), "History replaced");
        self.store.set_history(items);
    }

    pub fn select_region(&mut self, region: RegionId) {
        info!(region = %region, "Region selected");
        self.region = region;
        self.render();
    }

    pub fn focus(&mut self, location: &str) {
        self.layer.focus(location);
    }

    pub fn resize(&mut self) {
        self.layer.resize();
    }

    /// Flip the sound flag and return the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        info!(sound_on = self.sound_on, "Sound toggled");
        self.sound_on
    }

    fn apply(&mut self, alert: Option<Alert>) {
        if let Some(alert) = &alert {
            self.announce(alert);
        }
        self.store.set_current(alert);
        self.render();
    }

    fn announce(&mut self, alert: &Alert) {
        if self.sound_on {
            self.audio.play();
        }
        if self.notifier.permission() == Permission::Granted {
            let (title, body) = notification_text(alert);
            self.notifier.notify(&title, &body);
        }
    }

    fn render(&mut self) {
        self.layer.show(self.store.current(), self.region);
    }
}

impl<L> std::fmt::Debug for Controller<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("store", &self.store)
            .field("region", &self.region)
            .field("sound_on", &self.sound_on)
            .finish()
    }
}
