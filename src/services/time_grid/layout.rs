//! Vertical geometry for entry blocks, the drag preview and grid lines.
//!
//! Positions are percentages of grid height derived purely from lattice
//! indices. A block covers its end slot's row as well, so a block from index
//! `i` to `j` spans `j - i + 1` rows.

use super::lattice::Lattice;
use crate::models::error::GridError;
use crate::models::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub top_percent: f32,
    pub height_percent: f32,
}

impl SlotGeometry {
    pub fn bottom_percent(&self) -> f32 {
        self.top_percent + self.height_percent
    }

    fn from_indices(start: usize, end: usize, len: usize) -> Self {
        let len = len.max(1) as f32;
        Self {
            top_percent: 100.0 * start as f32 / len,
            height_percent: 100.0 * (end - start + 1) as f32 / len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One row of the background grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub slot: TimeSlot,
    pub geometry: SlotGeometry,
    pub style: LineStyle,
}

/// Index of `slot` in the lattice, or 0 when it is not part of it.
pub fn slot_index(slot: TimeSlot, lattice: &Lattice) -> usize {
    lattice.index_of(slot).unwrap_or(0)
}

/// Geometry for a stored interval. The start must be a lattice slot. An end
/// past the closing boundary (a click on the 18:00 row yields 18:15) is
/// clamped to the last row, so the block still ends inside the grid.
pub fn entry_geometry(
    start: TimeSlot,
    end: TimeSlot,
    lattice: &Lattice,
) -> Result<SlotGeometry, GridError> {
    if end < start {
        return Err(GridError::InvertedInterval { start, end });
    }
    let start_index = lattice
        .index_of(start)
        .ok_or(GridError::SlotOutsideLattice(start))?;
    let last_index = lattice.len().saturating_sub(1);
    let end_index = lattice.index_of(end).unwrap_or(last_index);
    Ok(SlotGeometry::from_indices(start_index, end_index, lattice.len()))
}

/// Geometry for the live preview. Preview endpoints come from pointer mapping
/// and are always lattice members, so the lenient lookup is enough.
pub fn preview_geometry(start: TimeSlot, end: TimeSlot, lattice: &Lattice) -> SlotGeometry {
    let start_index = slot_index(start, lattice);
    let end_index = slot_index(end, lattice).max(start_index);
    SlotGeometry::from_indices(start_index, end_index, lattice.len())
}

/// One line per slot: solid on the hour, dashed in between.
pub fn grid_lines(lattice: &Lattice) -> Vec<GridLine> {
    lattice
        .iter()
        .enumerate()
        .map(|(index, slot)| GridLine {
            slot,
            geometry: SlotGeometry::from_indices(index, index, lattice.len()),
            style: if slot.is_on_hour() {
                LineStyle::Solid
            } else {
                LineStyle::Dashed
            },
        })
        .collect()
}
