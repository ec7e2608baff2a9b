//! The AlertLayer trait definition.

use alert_core::{Alert, RegionId};

/// The capability set the controller drives a map through.
///
/// Implementations own their markers exclusively; nothing else may add or
/// remove them.
pub trait AlertLayer: Send {
    /// Remove every marker this layer placed. Safe with zero markers.
    fn clear(&mut self);

    /// Place one marker per location of `alert` shown under `region`.
    fn place(&mut self, alert: &Alert, region: RegionId);

    /// Centre on a location and open its marker's popup, if known.
    fn focus(&mut self, location: &str);

    /// Tell the surface its container changed size.
    fn resize(&mut self);

    /// Clear, then place `alert` if there is one.
    ///
    /// Every alert or region change goes through here so stale markers
    /// never survive a re-render.
    fn show(&mut self, alert: Option<&Alert>, region: RegionId) {
        self.clear();
        if let Some(alert) = alert {
            self.place(alert, region);
        }
    }
}
