//! Desktop notification and audio cue capabilities.

use alert_core::Alert;

/// Locations listed in a notification body.
const NOTIFICATION_LOCATIONS: usize = 3;

/// Whether the user allowed desktop notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// Not decided yet.
    #[default]
    Default,
    Granted,
    Denied,
}

/// Sends desktop notifications. Fire and forget.
pub trait Notifier: Send {
    fn permission(&self) -> Permission;

    /// Ask the user for permission and return the decision.
    fn request_permission(&mut self) -> Permission;

    fn notify(&mut self, title: &str, body: &str);
}

/// Plays the audible alert cue. Fire and forget.
pub trait AudioCue: Send {
    fn play(&mut self);
}

/// Notifier and audio cue that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn notify(&mut self, _title: &str, _body: &str) {}
}

impl AudioCue for Silent {
    fn play(&mut self) {}
}

/// Title and body of the notification for an alert.
pub fn notification_text(alert: &Alert) -> (String, String) {
    let title = format!("🚨 {}", alert.title);
    let body = alert
        .locations
        .iter()
        .take(NOTIFICATION_LOCATIONS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    (title, body)
}
