//! Terminal stand-ins for the desktop notifier and audio cue.

use std::io::Write;

use alert_monitor::{AudioCue, Notifier, Permission};
use tracing::{debug, info};

/// Rings the terminal bell.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioCue for TerminalBell {
    fn play(&mut self) {
        let mut stderr = std::io::stderr();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            debug!(error = %e, "Bell failed");
        }
    }
}

/// Prints notifications to stdout once permission is granted.
///
/// A terminal has nobody to ask, so any request is granted.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    permission: Permission,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that never shows anything.
    pub fn disabled() -> Self {
        Self {
            permission: Permission::Denied,
        }
    }
}

impl Notifier for TerminalNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        if self.permission == Permission::Default {
            self.permission = Permission::Granted;
        }
        self.permission
    }

    fn notify(&mut self, title: &str, body: &str) {
        info!(title, "Notification");
        println!("{title}\n   {body}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_grants_once_undecided() {
        let mut notifier = TerminalNotifier::new();
        assert_eq!(notifier.permission(), Permission::Default);
        assert_eq!(notifier.request_permission(), Permission::Granted);

        let mut disabled = TerminalNotifier::disabled();
        assert_eq!(disabled.request_permission(), Permission::Denied);
    }
}
