//! The MapSurface trait and the geometry it speaks.

use alert_core::LatLng;

use crate::error::MapError;

/// Handle to a marker on a surface.
pub type MarkerId = u64;

/// How a marker is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

/// Popup content bound to a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// Location name.
    pub heading: String,
    /// Category icon and alert title.
    pub summary: String,
    pub detail: Option<String>,
}

/// Options for fitting the view to bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOptions {
    pub max_zoom: u8,
    pub animate: bool,
}

/// An axis-aligned lat/lng box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for p in points {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }

    /// Extend each side by `ratio` times the span on that axis.
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_buffer = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lng_buffer = (self.north_east.lng - self.south_west.lng).abs() * ratio;
        Bounds {
            south_west: LatLng::new(
                self.south_west.lat - lat_buffer,
                self.south_west.lng - lng_buffer,
            ),
            north_east: LatLng::new(
                self.north_east.lat + lat_buffer,
                self.north_east.lng + lng_buffer,
            ),
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// True when a corner is not finite or the corners are swapped.
    pub fn is_degenerate(&self) -> bool {
        let finite = [
            self.south_west.lat,
            self.south_west.lng,
            self.north_east.lat,
            self.north_east.lng,
        ]
        .iter()
        .all(|v| v.is_finite());
        !finite
            || self.north_east.lat < self.south_west.lat
            || self.north_east.lng < self.south_west.lng
    }

    /// True when the box collapses to a single point.
    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }
}

/// A map component that can hold point markers and move its view.
///
/// The renderer calls it imperatively and knows nothing of its internals.
pub trait MapSurface: Send {
    /// Add a marker and return its handle.
    fn add_marker(&mut self, position: LatLng, style: &MarkerStyle, popup: Popup) -> MarkerId;

    /// Remove a marker. Unknown handles are ignored.
    fn remove_marker(&mut self, id: MarkerId);

    /// Fit the view to `bounds`.
    ///
    /// A box that collapses to a point centres the view on it at
    /// `options.max_zoom`. Degenerate boxes are an error.
    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) -> Result<(), MapError>;

    /// Centre the view on a point at a zoom level.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Open the popup bound to a marker.
    fn open_popup(&mut self, id: MarkerId) -> Result<(), MapError>;

    /// Recompute the surface size after its container changed.
    fn invalidate_size(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        assert!(Bounds::from_points(Vec::new()).is_none());

        let b = Bounds::from_points([
            LatLng::new(31.5, 34.6),
            LatLng::new(31.2, 34.9),
            LatLng::new(31.4, 34.3),
        ])
        .unwrap();
        assert_eq!(b.south_west, LatLng::new(31.2, 34.3));
        assert_eq!(b.north_east, LatLng::new(31.5, 34.9));
    }

    #[test]
    fn test_pad_extends_each_side() {
        let b = Bounds {
            south_west: LatLng::new(31.0, 34.0),
            north_east: LatLng::new(32.0, 35.0),
        }
        .pad(0.5);
        assert!(b.south_west.approx_eq(&LatLng::new(30.5, 33.5), 1e-9));
        assert!(b.north_east.approx_eq(&LatLng::new(32.5, 35.5), 1e-9));
    }

    #[test]
    fn test_single_point_is_fittable() {
        let b = Bounds::from_points([LatLng::new(31.5, 34.6)]).unwrap().pad(0.35);
        assert!(b.is_point());
        assert!(!b.is_degenerate());
        assert_eq!(b.center(), LatLng::new(31.5, 34.6));
    }

    #[test]
    fn test_nan_is_degenerate() {
        let b = Bounds {
            south_west: LatLng::new(f64::NAN, 34.0),
            north_east: LatLng::new(32.0, 35.0),
        };
        assert!(b.is_degenerate());

        let swapped = Bounds {
            south_west: LatLng::new(32.0, 35.0),
            north_east: LatLng::new(31.0, 34.0),
        };
        assert!(swapped.is_degenerate());
    }
}
