// Test fixtures - reusable test data
// Provides consistent slots, viewports and dates across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use day_planner::models::entry::{CalendarEntry, EntryTemplate};
use day_planner::models::time_slot::TimeSlot;
use day_planner::services::time_grid::{Lattice, ViewportGeometry};

/// Grid drawn from y = 120 with 12px per slot.
pub const SLOT_PX: f32 = 12.0;
pub const GRID_TOP: f32 = 120.0;

pub fn viewport() -> Option<ViewportGeometry> {
    Some(ViewportGeometry::new(GRID_TOP, SLOT_PX * 45.0))
}

pub fn slot(hour: u8, minute: u8) -> TimeSlot {
    TimeSlot::new(hour, minute).expect("fixture slot must be valid")
}

/// Vertical centre of a slot's row in the fixture viewport.
pub fn y_of(hour: u8, minute: u8) -> f32 {
    let index = Lattice::build()
        .index_of(slot(hour, minute))
        .expect("fixture slot must be on the lattice");
    GRID_TOP + index as f32 * SLOT_PX + SLOT_PX / 2.0
}

/// Tuesday, Jan 14 2025
pub fn planner_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
}

pub fn entry(id: &str, start: TimeSlot, end: TimeSlot) -> CalendarEntry {
    EntryTemplate::default().stamp(start, end).with_id(id)
}
