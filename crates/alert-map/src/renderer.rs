//! Marker renderer: turns an alert into markers on a surface.

use alert_core::{category, coordinates, region, Alert, LatLng, RegionId};
use tracing::debug;

use crate::layer::AlertLayer;
use crate::surface::{Bounds, FitOptions, MapSurface, MarkerId, MarkerStyle, Popup};

/// Fraction of the span added to each side when fitting bounds.
pub const FIT_PADDING: f64 = 0.35;

/// Zoom cap when fitting bounds.
pub const FIT_MAX_ZOOM: u8 = 12;

/// Zoom used when focusing a single location.
pub const FOCUS_ZOOM: u8 = 14;

/// Degrees within which a marker counts as sitting on a focused location.
pub const FOCUS_EPSILON: f64 = 0.002;

/// A marker this renderer placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub position: LatLng,
}

/// Owns the markers on a [`MapSurface`].
///
/// Surface failures are logged at debug level and otherwise ignored, so
/// a misbehaving map never takes the client down.
#[derive(Debug)]
pub struct MarkerRenderer<S> {
    surface: S,
    markers: Vec<PlacedMarker>,
}

impl<S: MapSurface> MarkerRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            markers: Vec::new(),
        }
    }

    /// Markers currently placed, in placement order.
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn popup(alert: &Alert, location: &str) -> Popup {
        let cat = category(&alert.category);
        Popup {
            heading: location.to_string(),
            summary: format!("{} {}", cat.icon, alert.title),
            detail: alert.description().map(str::to_string),
        }
    }
}

impl<S: MapSurface> AlertLayer for MarkerRenderer<S> {
    fn clear(&mut self) {
        for marker in self.markers.drain(..) {
            self.surface.remove_marker(marker.id);
        }
    }

    fn place(&mut self, alert: &Alert, region: RegionId) {
        let cat = category(&alert.category);
        let style = MarkerStyle {
            color: cat.color,
            icon: cat.icon,
        };

        let shown = region::filter_locations(&alert.locations, region);
        for location in shown.iter() {
            let Some(position) = coordinates(location) else {
                debug!(location = %location, "No coordinates, skipping marker");
                continue;
            };
            let id = self
                .surface
                .add_marker(position, &style, Self::popup(alert, location));
            self.markers.push(PlacedMarker { id, position });
        }

        let Some(bounds) = Bounds::from_points(self.markers.iter().map(|m| m.position)) else {
            return;
        };
        let options = FitOptions {
            max_zoom: FIT_MAX_ZOOM,
            animate: false,
        };
        if let Err(e) = self.surface.fit_bounds(bounds.pad(FIT_PADDING), options) {
            debug!(error = %e, "Fit bounds failed, keeping current view");
        }
    }

    fn focus(&mut self, location: &str) {
        let Some(target) = coordinates(location) else {
            debug!(location = %location, "Cannot focus unknown location");
            return;
        };

        self.surface.set_view(target, FOCUS_ZOOM);

        if let Some(marker) = self
            .markers
            .iter()
            .find(|m| m.position.approx_eq(&target, FOCUS_EPSILON))
        {
            if let Err(e) = self.surface.open_popup(marker.id) {
                debug!(error = %e, "Open popup failed");
            }
        }
    }

    fn resize(&mut self) {
        self.surface.invalidate_size();
    }
}
