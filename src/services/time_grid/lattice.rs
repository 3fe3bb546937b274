//! The quarter-hour lattice every grid position is addressed by.

use crate::models::time_slot::{TimeSlot, DAY_END_HOUR, DAY_START_HOUR};

/// Number of slots from 07:00 through the 18:00 boundary.
pub const LATTICE_LEN: usize = (DAY_END_HOUR - DAY_START_HOUR) as usize * 4 + 1;

/// Ordered slots of the displayed day. A slot's index here is the only
/// coordinate used for geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    slots: Vec<TimeSlot>,
}

impl Lattice {
    /// Build the canonical lattice, 07:00 to 18:00 inclusive.
    pub fn build() -> Self {
        let mut slots = Vec::with_capacity(LATTICE_LEN);
        let mut current = Some(TimeSlot::day_start());
        while let Some(slot) = current.filter(|s| *s <= TimeSlot::day_end()) {
            slots.push(slot);
            current = slot.next_quarter();
        }
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<TimeSlot> {
        self.slots.get(index).copied()
    }

    pub fn first(&self) -> TimeSlot {
        self.slots.first().copied().unwrap_or_else(TimeSlot::day_start)
    }

    /// Slot at `index`, clamped into the lattice.
    pub fn clamped(&self, index: i64) -> TimeSlot {
        let last = self.len().saturating_sub(1) as i64;
        let index = index.clamp(0, last.max(0)) as usize;
        self.get(index).unwrap_or_else(|| self.first())
    }

    /// Linear search by (hour, minute).
    pub fn index_of(&self, slot: TimeSlot) -> Option<usize> {
        self.slots.iter().position(|s| *s == slot)
    }

    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.index_of(slot).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        self.slots.iter().copied()
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::build()
    }
}
