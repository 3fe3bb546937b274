//! Pointer-to-slot mapping.
//!
//! The grid's on-screen bounding box is passed in as a [`ViewportGeometry`]
//! rather than looked up, so the mapping is testable without a UI surface.

use super::lattice::Lattice;
use crate::models::time_slot::TimeSlot;

/// Vertical extent of the grid in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    pub top: f32,
    pub height: f32,
}

impl ViewportGeometry {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// A grid that has not been laid out yet has no usable height.
    pub fn is_laid_out(&self) -> bool {
        self.height.is_finite() && self.height > 0.0
    }
}

/// Map a pointer's vertical position to the slot under it.
///
/// Positions above or below the grid clamp to the first or last slot. Without
/// a laid-out viewport the first slot is returned.
pub fn slot_from_pointer_y(
    y: f32,
    viewport: Option<ViewportGeometry>,
    lattice: &Lattice,
) -> TimeSlot {
    let Some(viewport) = viewport.filter(ViewportGeometry::is_laid_out) else {
        return lattice.first();
    };

    let relative_y = y - viewport.top;
    let slot_height = viewport.height / lattice.len() as f32;
    // NaN saturates to 0 and infinities to the i64 bounds, all clamped below.
    let index = (relative_y / slot_height).floor() as i64;
    lattice.clamped(index)
}
