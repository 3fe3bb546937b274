//! Pure view model for one day of the grid.
//!
//! Re-derived from scratch on every frame: the lattice comes from constants,
//! geometry from lattice indices, nothing is cached between calls.

use chrono::NaiveDate;

use super::drag::DragState;
use super::format::{format_day_header, format_day_total, format_hour_label, format_range};
use super::lattice::Lattice;
use super::layout::{entry_geometry, grid_lines, preview_geometry, GridLine, SlotGeometry};
use crate::models::entry::{CalendarEntry, EntryTemplate};
use crate::models::time_slot::{TimeSlot, DAY_END_HOUR, DAY_START_HOUR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Crosshair,
    Grabbing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RulerLabel {
    pub hour: u8,
    pub label: String,
    pub top_percent: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryBlock {
    pub id: String,
    pub title: String,
    pub color: String,
    pub time_label: String,
    pub geometry: SlotGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewBlock {
    pub title: String,
    pub color: String,
    pub time_label: String,
    pub geometry: SlotGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayViewModel {
    pub header: String,
    pub day_total: String,
    pub ruler: Vec<RulerLabel>,
    pub grid_lines: Vec<GridLine>,
    pub entries: Vec<EntryBlock>,
    pub preview: Option<PreviewBlock>,
    pub cursor: CursorHint,
}

/// Build everything the widget needs to paint one frame.
///
/// Entries whose endpoints fall outside the lattice are left out of
/// `entries` and logged; they still count towards the day total.
pub fn render(
    state: &DragState,
    entries: &[CalendarEntry],
    date: NaiveDate,
    template: &EntryTemplate,
) -> DayViewModel {
    let lattice = Lattice::build();

    let ruler = (DAY_START_HOUR..=DAY_END_HOUR)
        .filter_map(|hour| {
            let slot = TimeSlot::new(hour, 0).ok()?;
            let index = lattice.index_of(slot)?;
            Some(RulerLabel {
                hour,
                label: format_hour_label(hour),
                top_percent: 100.0 * index as f32 / lattice.len() as f32,
            })
        })
        .collect();

    let blocks = entries
        .iter()
        .filter_map(|entry| match entry_geometry(entry.start_time, entry.end_time, &lattice) {
            Ok(geometry) => Some(EntryBlock {
                id: entry.id.clone(),
                title: entry.title.clone(),
                color: entry.color.clone(),
                time_label: format_range(entry.start_time, entry.end_time),
                geometry,
            }),
            Err(err) => {
                log::warn!("Not drawing entry {}: {}", entry.id, err);
                None
            }
        })
        .collect();

    let preview = state.preview().map(|preview| PreviewBlock {
        title: template.title().to_string(),
        color: template.color().to_string(),
        time_label: format_range(preview.start, preview.end),
        geometry: preview_geometry(preview.start, preview.end, &lattice),
    });

    DayViewModel {
        header: format_day_header(date),
        day_total: format_day_total(entries),
        ruler,
        grid_lines: grid_lines(&lattice),
        entries: blocks,
        preview,
        cursor: if state.is_active() {
            CursorHint::Grabbing
        } else {
            CursorHint::Crosshair
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slot(hour: u8, minute: u8) -> TimeSlot {
        TimeSlot::new(hour, minute).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    fn entry(id: &str, start: TimeSlot, end: TimeSlot) -> CalendarEntry {
        EntryTemplate::default().stamp(start, end).with_id(id)
    }

    #[test]
    fn test_idle_render() {
        let entries = vec![
            entry("a", slot(9, 0), slot(10, 0)),
            entry("b", slot(13, 0), slot(13, 30)),
        ];
        let view = render(&DragState::Idle, &entries, date(), &EntryTemplate::default());

        assert_eq!(view.header, "7 FRI");
        assert_eq!(view.day_total, "1:30:00");
        assert_eq!(view.cursor, CursorHint::Crosshair);
        assert_eq!(view.preview, None);
        assert_eq!(view.grid_lines.len(), 45);
        assert_eq!(view.ruler.len(), 12);
        assert_eq!(view.ruler[0].label, "7:00 AM");
        assert_eq!(view.ruler[11].label, "6:00 PM");

        let labels: Vec<&str> = view.entries.iter().map(|b| b.time_label.as_str()).collect();
        assert_eq!(labels, vec!["9:00 AM - 10:00 AM", "1:00 PM - 1:30 PM"]);
    }

    #[test]
    fn test_active_render_has_preview() {
        let state = DragState::Active {
            anchor: slot(11, 0),
            pointer_slot: slot(10, 15),
        };
        let view = render(&state, &[], date(), &EntryTemplate::default());

        assert_eq!(view.cursor, CursorHint::Grabbing);
        let preview = view.preview.unwrap();
        assert_eq!(preview.title, "New Task");
        assert_eq!(preview.time_label, "10:15 AM - 11:00 AM");
        assert!(preview.geometry.height_percent > 0.0);
    }

    #[test]
    fn test_last_row_entry_is_drawn_to_grid_bottom() {
        let entries = vec![entry("late", slot(18, 0), slot(18, 15))];
        let view = render(&DragState::Idle, &entries, date(), &EntryTemplate::default());

        assert_eq!(view.entries.len(), 1);
        let block = &view.entries[0];
        assert_eq!(block.time_label, "6:00 PM - 6:15 PM");
        assert!((block.geometry.bottom_percent() - 100.0).abs() < 1e-4);
        assert_eq!(view.day_total, "0:15:00");
    }

    #[test]
    fn test_entry_starting_after_closing_boundary_is_skipped() {
        let entries = vec![
            entry("late", slot(18, 15), slot(18, 30)),
            entry("ok", slot(8, 0), slot(8, 30)),
        ];
        let view = render(&DragState::Idle, &entries, date(), &EntryTemplate::default());

        let ids: Vec<&str> = view.entries.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["ok"]);
        assert_eq!(view.day_total, "0:45:00");
    }
}
