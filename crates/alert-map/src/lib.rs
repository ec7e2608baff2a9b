//! Map rendering for the live alert client.
//!
//! The map itself is an external collaborator reached through the
//! [`MapSurface`] trait. [`MarkerRenderer`] owns every marker it places and
//! exposes the [`AlertLayer`] capability set the controller depends on:
//! clear, place, focus and resize.
//!
//! [`RecordingSurface`] records every surface call and is what tests and
//! headless runs plug in.

mod error;
mod layer;
mod recording;
mod renderer;
mod surface;

pub use error::MapError;
pub use layer::AlertLayer;
pub use recording::{RecordingSurface, SurfaceOp};
pub use renderer::{
    MarkerRenderer, PlacedMarker, FIT_MAX_ZOOM, FIT_PADDING, FOCUS_EPSILON, FOCUS_ZOOM,
};
pub use surface::{Bounds, FitOptions, MapSurface, MarkerId, MarkerStyle, Popup};
