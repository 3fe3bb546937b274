// Entry module
// Time-tracked blocks carved out of the day grid

use crate::models::time_slot::TimeSlot;
use crate::models::error::GridError;

/// Title stamped on entries created by dragging.
pub const DEFAULT_ENTRY_TITLE: &str = "New Task";
/// Color stamped on entries created by dragging.
pub const DEFAULT_ENTRY_COLOR: &str = "#3B82F6";

/// A stored entry. The `id` is assigned by whoever owns the entry list,
/// never by the grid engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub id: String,
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
    pub title: String,
    pub color: String,
}

impl CalendarEntry {
    /// Check ordering and color format.
    pub fn validate(&self) -> Result<(), GridError> {
        validate_interval(self.start_time, self.end_time)?;
        validate_color(&self.color)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_time
            .minutes_since_midnight()
            .saturating_sub(self.start_time.minutes_since_midnight())
    }
}

/// An entry emitted by a completed drag, before the host gives it identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
    pub title: String,
    pub color: String,
}

impl NewEntry {
    pub fn with_id(self, id: impl Into<String>) -> CalendarEntry {
        CalendarEntry {
            id: id.into(),
            start_time: self.start_time,
            end_time: self.end_time,
            title: self.title,
            color: self.color,
        }
    }
}

/// Title and color applied to every entry a drag produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTemplate {
    title: String,
    color: String,
}

impl EntryTemplate {
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Result<Self, GridError> {
        let color = color.into();
        validate_color(&color)?;
        Ok(Self {
            title: title.into(),
            color,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn stamp(&self, start_time: TimeSlot, end_time: TimeSlot) -> NewEntry {
        NewEntry {
            start_time,
            end_time,
            title: self.title.clone(),
            color: self.color.clone(),
        }
    }
}

impl Default for EntryTemplate {
    fn default() -> Self {
        Self {
            title: DEFAULT_ENTRY_TITLE.to_string(),
            color: DEFAULT_ENTRY_COLOR.to_string(),
        }
    }
}

fn validate_interval(start: TimeSlot, end: TimeSlot) -> Result<(), GridError> {
    if end <= start {
        return Err(GridError::InvertedInterval { start, end });
    }
    Ok(())
}

/// Accepts `#RRGGBB` only.
pub fn validate_color(color: &str) -> Result<(), GridError> {
    let valid = color
        .strip_prefix('#')
        .map(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(GridError::InvalidColor(color.to_string()))
    }
}
