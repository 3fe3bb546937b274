// Error module
// Invariant violations shared by the models and the time grid engine

use thiserror::Error;

use crate::models::time_slot::TimeSlot;

/// Raised when data breaks the lattice contract.
///
/// User input never produces these: pointer mapping clamps instead of
/// failing. They surface only when a caller hands the engine bad data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("time slot {hour:02}:{minute:02} is outside the planner day")]
    SlotOutOfRange { hour: u8, minute: u8 },

    #[error("time slot {0} is not part of the grid lattice")]
    SlotOutsideLattice(TimeSlot),

    #[error("interval {start} - {end} ends before it starts")]
    InvertedInterval { start: TimeSlot, end: TimeSlot },

    #[error("color {0:?} must be in hex format (#RRGGBB)")]
    InvalidColor(String),
}
