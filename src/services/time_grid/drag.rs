//! Drag-to-create state machine.
//!
//! A drag runs `Idle -> Active -> Idle`. Pointer-down anchors it, moves track
//! the slot under the pointer, and pointer-up or pointer-leave commits it into
//! exactly one [`NewEntry`]. There is no cancel path.

use super::lattice::Lattice;
use super::pointer::{slot_from_pointer_y, ViewportGeometry};
use crate::models::entry::{EntryTemplate, NewEntry};
use crate::models::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer input as seen by the grid, with `y` in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridPointerEvent {
    Down { button: PointerButton, y: f32 },
    Move { y: f32 },
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Active {
        anchor: TimeSlot,
        pointer_slot: TimeSlot,
    },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Active { .. })
    }

    /// The in-progress interval with its endpoints in order.
    pub fn preview(&self) -> Option<DragPreview> {
        match *self {
            DragState::Idle => None,
            DragState::Active {
                anchor,
                pointer_slot,
            } => Some(DragPreview {
                start: anchor.min(pointer_slot),
                end: anchor.max(pointer_slot),
            }),
        }
    }
}

/// Ordered view of an active drag, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPreview {
    pub start: TimeSlot,
    pub end: TimeSlot,
}

/// Receives entries produced by completed drags.
#[cfg_attr(test, mockall::automock)]
pub trait EntrySink {
    fn on_entry_create(&mut self, entry: NewEntry);
}

#[derive(Debug, Clone, Default)]
pub struct DragMachine {
    state: DragState,
    template: EntryTemplate,
}

impl DragMachine {
    pub fn new(template: EntryTemplate) -> Self {
        Self {
            state: DragState::Idle,
            template,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn preview(&self) -> Option<DragPreview> {
        self.state.preview()
    }

    pub fn template(&self) -> &EntryTemplate {
        &self.template
    }

    pub fn set_template(&mut self, template: EntryTemplate) {
        self.template = template;
    }

    /// Drop any in-progress drag without producing an entry. Used by the host
    /// when the displayed day changes underneath a drag.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Anchor a new drag. Only the primary button starts one, and only from
    /// `Idle`. Returns whether a drag started.
    pub fn start(
        &mut self,
        button: PointerButton,
        y: f32,
        viewport: Option<ViewportGeometry>,
        lattice: &Lattice,
    ) -> bool {
        if button != PointerButton::Primary || self.state.is_active() {
            return false;
        }
        let anchor = slot_from_pointer_y(y, viewport, lattice);
        log::debug!("Drag started at {}", anchor);
        self.state = DragState::Active {
            anchor,
            pointer_slot: anchor,
        };
        true
    }

    /// Track the slot under the pointer. No-op while idle.
    pub fn update(&mut self, y: f32, viewport: Option<ViewportGeometry>, lattice: &Lattice) {
        if let DragState::Active { anchor, .. } = self.state {
            let pointer_slot = slot_from_pointer_y(y, viewport, lattice);
            self.state = DragState::Active {
                anchor,
                pointer_slot,
            };
        }
    }

    /// Finish the drag and return the entry it produced. `None` while idle.
    pub fn commit(&mut self) -> Option<NewEntry> {
        let entry = self.pending_entry()?;
        log::info!("Drag committed {} - {}", entry.start_time, entry.end_time);
        self.state = DragState::Idle;
        Some(entry)
    }

    /// Finish the drag, handing the entry to `sink` before returning to
    /// `Idle`. Returns whether an entry was emitted.
    pub fn commit_into(&mut self, sink: &mut dyn EntrySink) -> bool {
        let Some(entry) = self.pending_entry() else {
            return false;
        };
        log::info!("Drag committed {} - {}", entry.start_time, entry.end_time);
        sink.on_entry_create(entry);
        self.state = DragState::Idle;
        true
    }

    /// Feed one pointer event through the machine.
    pub fn handle(
        &mut self,
        event: GridPointerEvent,
        viewport: Option<ViewportGeometry>,
        lattice: &Lattice,
        sink: &mut dyn EntrySink,
    ) -> bool {
        match event {
            GridPointerEvent::Down { button, y } => {
                self.start(button, y, viewport, lattice);
                false
            }
            GridPointerEvent::Move { y } => {
                self.update(y, viewport, lattice);
                false
            }
            GridPointerEvent::Up | GridPointerEvent::Leave => self.commit_into(sink),
        }
    }

    /// The entry a commit would emit right now.
    fn pending_entry(&self) -> Option<NewEntry> {
        let DragPreview { start, end } = self.state.preview()?;
        // Every entry spans at least one slot, even for a plain click.
        let end = start.next_quarter().map_or(end, |min_end| end.max(min_end));
        Some(self.template.stamp(start, end))
    }
}
