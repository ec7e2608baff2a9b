//! Map surface that draws markers as log lines.

use std::collections::BTreeMap;

use alert_core::LatLng;
use alert_map::{Bounds, FitOptions, MapError, MapSurface, MarkerId, MarkerStyle, Popup};
use tracing::info;

/// A headless map: keeps markers in memory and logs every change.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    markers: BTreeMap<MarkerId, (LatLng, Popup)>,
    next_id: MarkerId,
    view: Option<(LatLng, u8)>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre and zoom of the last view change.
    #[cfg(test)]
    fn view(&self) -> Option<(LatLng, u8)> {
        self.view
    }
}

impl MapSurface for ConsoleSurface {
    fn add_marker(&mut self, position: LatLng, style: &MarkerStyle, popup: Popup) -> MarkerId {
        self.next_id += 1;
        info!(
            marker = self.next_id,
            location = %popup.heading,
            lat = position.lat,
            lng = position.lng,
            icon = style.icon,
            "Marker placed"
        );
        self.markers.insert(self.next_id, (position, popup));
        self.next_id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
    }

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) -> Result<(), MapError> {
        if bounds.is_degenerate() {
            return Err(MapError::DegenerateBounds);
        }
        let center = bounds.center();
        if bounds.is_point() {
            self.set_view(center, options.max_zoom);
            return Ok(());
        }
        info!(
            lat = center.lat,
            lng = center.lng,
            max_zoom = options.max_zoom,
            "View fitted to markers"
        );
        self.view = Some((center, options.max_zoom));
        Ok(())
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        info!(lat = center.lat, lng = center.lng, zoom, "View centred");
        self.view = Some((center, zoom));
    }

    fn open_popup(&mut self, id: MarkerId) -> Result<(), MapError> {
        let (_, popup) = self.markers.get(&id).ok_or(MapError::UnknownMarker(id))?;
        match &popup.detail {
            Some(detail) => println!("📍 {} | {} | {}", popup.heading, popup.summary, detail),
            None => println!("📍 {} | {}", popup.heading, popup.summary),
        }
        Ok(())
    }

    fn invalidate_size(&mut self) {
        info!(markers = self.markers.len(), "Map resized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popup() -> Popup {
        Popup {
            heading: "חיפה".into(),
            summary: "🚀 ירי רקטות".into(),
            detail: None,
        }
    }

    #[test]
    fn test_markers_and_popups() {
        let mut surface = ConsoleSurface::new();
        let style = MarkerStyle {
            color: "#d32f2f",
            icon: "🚀",
        };
        let id = surface.add_marker(LatLng::new(32.79, 34.99), &style, popup());
        assert!(surface.open_popup(id).is_ok());

        surface.remove_marker(id);
        assert_eq!(surface.open_popup(id), Err(MapError::UnknownMarker(id)));
    }

    #[test]
    fn test_single_point_fit_centres_at_max_zoom() {
        let mut surface = ConsoleSurface::new();
        let point = LatLng::new(32.79, 34.99);
        let bounds = Bounds {
            south_west: point,
            north_east: point,
        };
        let options = FitOptions {
            max_zoom: 12,
            animate: false,
        };
        assert_eq!(surface.fit_bounds(bounds, options), Ok(()));
        assert_eq!(surface.view(), Some((point, 12)));
    }

    #[test]
    fn test_non_finite_fit_fails() {
        let mut surface = ConsoleSurface::new();
        let bounds = Bounds {
            south_west: LatLng::new(f64::NAN, 34.99),
            north_east: LatLng::new(32.79, 34.99),
        };
        let options = FitOptions {
            max_zoom: 12,
            animate: false,
        };
        assert_eq!(
            surface.fit_bounds(bounds, options),
            Err(MapError::DegenerateBounds)
        );
        assert_eq!(surface.view(), None);
    }
}
