//! Error types for map surface operations.

use thiserror::Error;

use crate::surface::MarkerId;

/// Errors a map surface can report.
///
/// The renderer swallows all of these; markers stay where they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The bounds are not finite or their corners are swapped.
    #[error("degenerate bounds")]
    DegenerateBounds,

    /// The marker is not on the surface.
    #[error("unknown marker {0}")]
    UnknownMarker(MarkerId),

    /// Any other surface-specific failure.
    #[error("surface error: {0}")]
    Surface(String),
}
