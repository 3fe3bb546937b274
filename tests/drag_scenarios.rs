// End-to-end drag scenarios: pointer events through the drag machine into
// the entry store, then back out through render.

mod fixtures;

use day_planner::services::entry::EntryStore;
use day_planner::services::time_grid::render::CursorHint;
use day_planner::services::time_grid::{
    render, DragMachine, DragState, GridPointerEvent, Lattice, PointerButton,
};
use fixtures::{planner_day, slot, viewport, y_of};
use pretty_assertions::assert_eq;

fn run(events: &[GridPointerEvent]) -> (DragMachine, EntryStore) {
    let lattice = Lattice::build();
    let mut machine = DragMachine::default();
    let mut store = EntryStore::with_id_seed(planner_day(), 1);
    for event in events {
        machine.handle(*event, viewport(), &lattice, &mut store);
    }
    (machine, store)
}

fn down(hour: u8, minute: u8) -> GridPointerEvent {
    GridPointerEvent::Down {
        button: PointerButton::Primary,
        y: y_of(hour, minute),
    }
}

fn move_to(hour: u8, minute: u8) -> GridPointerEvent {
    GridPointerEvent::Move {
        y: y_of(hour, minute),
    }
}

#[test]
fn test_click_creates_quarter_hour_entry() {
    let (machine, store) = run(&[down(9, 0), GridPointerEvent::Up]);

    let entries = store.current_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!((entries[0].start_time, entries[0].end_time), (slot(9, 0), slot(9, 15)));
    assert_eq!(entries[0].title, "New Task");
    assert_eq!(entries[0].color, "#3B82F6");
    assert_eq!(machine.state(), DragState::Idle);
}

#[test]
fn test_reversed_drag_swaps_endpoints() {
    let (_, store) = run(&[
        down(10, 30),
        move_to(10, 0),
        move_to(9, 15),
        GridPointerEvent::Up,
    ]);

    let entries = store.current_entries();
    assert_eq!((entries[0].start_time, entries[0].end_time), (slot(9, 15), slot(10, 30)));
}

#[test]
fn test_pointer_leave_auto_commits() {
    let (machine, store) = run(&[down(14, 0), move_to(15, 0), GridPointerEvent::Leave]);

    let entries = store.current_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!((entries[0].start_time, entries[0].end_time), (slot(14, 0), slot(15, 0)));
    assert!(!machine.state().is_active());
}

#[test]
fn test_drag_past_grid_bottom_clamps_to_closing_slot() {
    let (_, store) = run(&[
        down(17, 0),
        GridPointerEvent::Move { y: 5_000.0 },
        GridPointerEvent::Up,
    ]);

    let entries = store.current_entries();
    assert_eq!((entries[0].start_time, entries[0].end_time), (slot(17, 0), slot(18, 0)));
}

#[test]
fn test_click_on_last_row_is_drawn() {
    let (machine, store) = run(&[down(18, 0), GridPointerEvent::Up]);

    let entries = store.current_entries();
    assert_eq!((entries[0].start_time, entries[0].end_time), (slot(18, 0), slot(18, 15)));

    let view = render(&machine.state(), entries, planner_day(), machine.template());
    assert_eq!(view.entries.len(), 1);
    assert!((view.entries[0].geometry.bottom_percent() - 100.0).abs() < 1e-3);
    assert_eq!(view.day_total, "0:15:00");
}

#[test]
fn test_stray_events_create_nothing() {
    let (_, store) = run(&[
        move_to(9, 0),
        GridPointerEvent::Up,
        GridPointerEvent::Leave,
        GridPointerEvent::Down {
            button: PointerButton::Secondary,
            y: y_of(9, 0),
        },
        GridPointerEvent::Up,
    ]);

    assert!(store.current_entries().is_empty());
}

#[test]
fn test_each_drag_creates_exactly_one_entry() {
    let (_, store) = run(&[
        down(8, 0),
        move_to(8, 45),
        GridPointerEvent::Up,
        GridPointerEvent::Up,
        down(13, 0),
        move_to(13, 15),
        GridPointerEvent::Leave,
        GridPointerEvent::Up,
    ]);

    let ids: Vec<&str> = store.current_entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1-0", "1-1"]);
}

#[test]
fn test_render_after_drags_shows_entries_and_total() {
    let (machine, store) = run(&[
        down(9, 0),
        move_to(10, 0),
        GridPointerEvent::Up,
        down(13, 0),
        move_to(13, 30),
        GridPointerEvent::Up,
        down(16, 0),
        move_to(16, 30),
    ]);

    let view = render(
        &machine.state(),
        store.current_entries(),
        planner_day(),
        machine.template(),
    );

    assert_eq!(view.header, "14 TUE");
    assert_eq!(view.day_total, "1:30:00");
    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.cursor, CursorHint::Grabbing);
    assert_eq!(
        view.preview.map(|p| p.time_label),
        Some("4:00 PM - 4:30 PM".to_string())
    );
}
