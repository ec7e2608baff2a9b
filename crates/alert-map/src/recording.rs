//! In-memory surface that records every call.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use alert_core::LatLng;

use crate::error::MapError;
use crate::surface::{Bounds, FitOptions, MapSurface, MarkerId, MarkerStyle, Popup};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Add {
        id: MarkerId,
        position: LatLng,
        color: &'static str,
        popup: Popup,
    },
    Remove(MarkerId),
    Fit(Bounds, FitOptions),
    SetView(LatLng, u8),
    OpenPopup(MarkerId),
    Invalidate,
}

#[derive(Debug, Default)]
struct Log {
    ops: Vec<SurfaceOp>,
    live: BTreeMap<MarkerId, LatLng>,
    next_id: MarkerId,
    reject_fit: bool,
}

/// A [`MapSurface`] that keeps its markers in memory and logs every call.
///
/// Clones share the same log so a test can inspect a surface that a
/// renderer owns. `fit_bounds` fails with [`MapError::DegenerateBounds`]
/// for non-finite or swapped boxes, like a real map would.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<Log>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Log> {
        self.log.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every subsequent `fit_bounds` call fail.
    pub fn reject_fit(&self, reject: bool) {
        self.log().reject_fit = reject;
    }

    /// Every call made so far, oldest first.
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.log().ops.clone()
    }

    /// Forget recorded calls. Live markers are kept.
    pub fn clear_ops(&self) {
        self.log().ops.clear();
    }

    /// Positions of the markers currently on the surface.
    pub fn live_markers(&self) -> Vec<LatLng> {
        self.log().live.values().copied().collect()
    }

    pub fn live_count(&self) -> usize {
        self.log().live.len()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.log().ops.iter().filter(|op| pred(op)).count()
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, position: LatLng, style: &MarkerStyle, popup: Popup) -> MarkerId {
        let mut log = self.log();
        log.next_id += 1;
        let id = log.next_id;
        log.live.insert(id, position);
        log.ops.push(SurfaceOp::Add {
            id,
            position,
            color: style.color,
            popup,
        });
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        let mut log = self.log();
        log.live.remove(&id);
        log.ops.push(SurfaceOp::Remove(id));
    }

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) -> Result<(), MapError> {
        let mut log = self.log();
        log.ops.push(SurfaceOp::Fit(bounds, options));
        if log.reject_fit {
            return Err(MapError::Surface("fit rejected".to_string()));
        }
        if bounds.is_degenerate() {
            return Err(MapError::DegenerateBounds);
        }
        Ok(())
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.log().ops.push(SurfaceOp::SetView(center, zoom));
    }

    fn open_popup(&mut self, id: MarkerId) -> Result<(), MapError> {
        let mut log = self.log();
        log.ops.push(SurfaceOp::OpenPopup(id));
        if log.live.contains_key(&id) {
            Ok(())
        } else {
            Err(MapError::UnknownMarker(id))
        }
    }

    fn invalidate_size(&mut self) {
        self.log().ops.push(SurfaceOp::Invalidate);
    }
}
