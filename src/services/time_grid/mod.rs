// Time grid module
// Quarter-hour lattice, pointer mapping, drag state machine and layout for
// the day view

pub mod drag;
pub mod format;
pub mod lattice;
pub mod layout;
pub mod pointer;
pub mod render;

pub use drag::{
    DragMachine, DragPreview, DragState, EntrySink, GridPointerEvent, PointerButton,
};
pub use crate::models::error::GridError;
pub use lattice::{Lattice, LATTICE_LEN};
pub use layout::{entry_geometry, slot_index, SlotGeometry};
pub use pointer::{slot_from_pointer_y, ViewportGeometry};
pub use render::{render, DayViewModel};
