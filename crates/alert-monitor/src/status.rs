//! Connection status derived from poll outcomes.

use chrono::{DateTime, Utc};

/// Where the connection to the alerts server stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No poll has completed yet.
    #[default]
    Connecting,
    Connected,
    Error,
}

impl ConnectionState {
    /// Status line shown to the user.
    pub fn text(&self) -> &'static str {
        match self {
            ConnectionState::Connecting => "מתחבר...",
            ConnectionState::Connected => "מחובר",
            ConnectionState::Error => "שגיאת חיבור",
        }
    }
}

/// Connection state plus the time of the last successful poll.
///
/// Only poll outcomes move it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionStatus {
    state: ConnectionState,
    last_update: Option<DateTime<Utc>>,
}

impl ConnectionStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn text(&self) -> &'static str {
        self.state.text()
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub(crate) fn mark_connected(&mut self, now: DateTime<Utc>) {
        self.state = ConnectionState::Connected;
        self.last_update = Some(now);
    }

    /// The last successful update time is kept.
    pub(crate) fn mark_error(&mut self) {
        self.state = ConnectionState::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        let mut status = ConnectionStatus::new();
        assert_eq!(status.state(), ConnectionState::Connecting);
        assert_eq!(status.text(), "מתחבר...");
        assert!(status.last_update().is_none());

        let now = Utc::now();
        status.mark_connected(now);
        assert_eq!(status.text(), "מחובר");
        assert_eq!(status.last_update(), Some(now));

        status.mark_error();
        assert_eq!(status.state(), ConnectionState::Error);
        assert_eq!(status.text(), "שגיאת חיבור");
        assert_eq!(status.last_update(), Some(now));
    }
}
