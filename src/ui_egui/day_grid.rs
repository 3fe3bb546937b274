//! Day grid widget.
//!
//! Turns egui pointer input into [`GridPointerEvent`]s for the drag machine,
//! then paints the [`DayViewModel`] produced by `render`. All geometry comes
//! from the view model's percentages; the widget only scales them to pixels.

use chrono::NaiveDate;
use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use super::palette::{entry_fill, parse_color, GridPalette};
use crate::models::entry::CalendarEntry;
use crate::services::time_grid::layout::{LineStyle, SlotGeometry};
use crate::services::time_grid::render::{CursorHint, DayViewModel};
use crate::services::time_grid::{
    render, DragMachine, EntrySink, GridPointerEvent, Lattice, PointerButton, ViewportGeometry,
};

const HEADER_HEIGHT: f32 = 32.0;
const RULER_WIDTH: f32 = 80.0;
const MIN_GRID_HEIGHT: f32 = 540.0;
const BLOCK_INSET: f32 = 4.0;
const ACCENT_WIDTH: f32 = 4.0;

pub struct DayGrid;

impl DayGrid {
    /// Draw the grid for `date` and route pointer input through `machine`.
    ///
    /// `entries` is the snapshot drawn this frame; entries committed during
    /// the frame go to `sink` and show up on the next one.
    pub fn show(
        ui: &mut egui::Ui,
        machine: &mut DragMachine,
        date: NaiveDate,
        entries: &[CalendarEntry],
        sink: &mut dyn EntrySink,
    ) {
        let palette = GridPalette::from_visuals(ui.visuals());
        let (header_rect, _) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), HEADER_HEIGHT), Sense::hover());
        let height = ui.available_height().max(MIN_GRID_HEIGHT);
        let (outer, response) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), height),
            Sense::click_and_drag(),
        );
        let ruler_rect =
            Rect::from_min_max(outer.min, Pos2::new(outer.left() + RULER_WIDTH, outer.bottom()));
        let grid_rect = Rect::from_min_max(Pos2::new(ruler_rect.right(), outer.top()), outer.max);

        let lattice = Lattice::build();
        let viewport = Some(ViewportGeometry::new(grid_rect.top(), grid_rect.height()));
        for event in pointer_events(ui, &response, grid_rect, machine.state().is_active()) {
            if machine.handle(event, viewport, &lattice, sink) {
                ui.ctx().request_repaint();
            }
        }

        let view = render(&machine.state(), entries, date, machine.template());
        paint_header(ui, &view, header_rect, &palette);
        paint_ruler(ui, &view, ruler_rect, &palette);
        paint_grid(ui, &view, grid_rect, &palette);

        if response.contains_pointer() || machine.state().is_active() {
            ui.ctx().set_cursor_icon(match view.cursor {
                CursorHint::Crosshair => CursorIcon::Crosshair,
                CursorHint::Grabbing => CursorIcon::Grabbing,
            });
        }
    }
}

const BUTTONS: [(egui::PointerButton, PointerButton); 3] = [
    (egui::PointerButton::Primary, PointerButton::Primary),
    (egui::PointerButton::Secondary, PointerButton::Secondary),
    (egui::PointerButton::Middle, PointerButton::Middle),
];

/// The pointer input of one frame, read out of egui.
#[derive(Debug, Clone, Default, PartialEq)]
struct PointerFrame {
    over_grid: bool,
    interact_pos: Option<Pos2>,
    hover_pos: Option<Pos2>,
    pressed: Vec<PointerButton>,
    released: bool,
}

fn pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    grid_rect: Rect,
    dragging: bool,
) -> Vec<GridPointerEvent> {
    let over_grid = response.contains_pointer();
    let frame = ui.input(|input| {
        let pointer = &input.pointer;
        PointerFrame {
            over_grid,
            interact_pos: pointer.interact_pos(),
            hover_pos: pointer.hover_pos(),
            pressed: BUTTONS
                .iter()
                .filter(|(egui_button, _)| pointer.button_pressed(*egui_button))
                .map(|(_, button)| *button)
                .collect(),
            released: pointer.any_released(),
        }
    });
    translate_pointer(&frame, grid_rect, dragging)
}

/// Map one frame of input to grid events. Presses only count inside
/// `grid_rect`; while `dragging`, leaving the rect (or the window) is a leave.
fn translate_pointer(
    frame: &PointerFrame,
    grid_rect: Rect,
    dragging: bool,
) -> Vec<GridPointerEvent> {
    let mut events = Vec::new();

    if frame.over_grid {
        if let Some(pos) = frame.interact_pos.filter(|pos| grid_rect.contains(*pos)) {
            events.extend(
                frame
                    .pressed
                    .iter()
                    .map(|&button| GridPointerEvent::Down { button, y: pos.y }),
            );
        }
    }

    if dragging {
        match frame.hover_pos {
            Some(pos) if grid_rect.contains(pos) => {
                events.push(GridPointerEvent::Move { y: pos.y })
            }
            _ => events.push(GridPointerEvent::Leave),
        }
    }

    if frame.released {
        events.push(GridPointerEvent::Up);
    }
    events
}

fn to_pixels(rect: Rect, geometry: &SlotGeometry) -> Rect {
    let top = rect.top() + rect.height() * geometry.top_percent / 100.0;
    let bottom = rect.top() + rect.height() * geometry.bottom_percent() / 100.0;
    Rect::from_min_max(
        Pos2::new(rect.left() + BLOCK_INSET, top),
        Pos2::new(rect.right() - BLOCK_INSET, bottom.min(rect.bottom())),
    )
}

fn paint_header(ui: &egui::Ui, view: &DayViewModel, rect: Rect, palette: &GridPalette) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.ruler_bg);
    painter.text(
        Pos2::new(rect.right() - 8.0, rect.center().y),
        Align2::RIGHT_CENTER,
        format!("⏱ {}", view.day_total),
        FontId::proportional(13.0),
        palette.ruler_text,
    );
    painter.text(
        Pos2::new(rect.left() + 8.0, rect.center().y),
        Align2::LEFT_CENTER,
        &view.header,
        FontId::proportional(18.0),
        palette.entry_text,
    );
}

fn paint_ruler(ui: &egui::Ui, view: &DayViewModel, rect: Rect, palette: &GridPalette) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.ruler_bg);
    for label in &view.ruler {
        let y = rect.top() + rect.height() * label.top_percent / 100.0;
        painter.text(
            Pos2::new(rect.right() - 8.0, y + 2.0),
            Align2::RIGHT_TOP,
            &label.label,
            FontId::proportional(11.0),
            palette.ruler_text,
        );
    }
    painter.line_segment(
        [rect.right_top(), rect.right_bottom()],
        Stroke::new(1.0, palette.hour_line),
    );
}

fn paint_grid(ui: &egui::Ui, view: &DayViewModel, rect: Rect, palette: &GridPalette) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.grid_bg);

    for line in &view.grid_lines {
        let y = rect.top() + rect.height() * line.geometry.top_percent / 100.0;
        let points = [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)];
        match line.style {
            LineStyle::Solid => {
                painter.line_segment(points, Stroke::new(1.0, palette.hour_line));
            }
            LineStyle::Dashed => {
                painter.extend(Shape::dashed_line(
                    &points,
                    Stroke::new(1.0, palette.slot_line),
                    4.0,
                    3.0,
                ));
            }
        }
    }

    for block in &view.entries {
        let color = parse_color(&block.color).unwrap_or(palette.fallback_entry);
        let block_rect = to_pixels(rect, &block.geometry);
        painter.rect_filled(block_rect, 4.0, entry_fill(color));
        paint_accent(&painter, block_rect, color);
        paint_labels(&painter, block_rect, &block.title, &block.time_label, palette);
    }

    if let Some(preview) = &view.preview {
        let block_rect = to_pixels(rect, &preview.geometry);
        painter.rect_filled(block_rect, 4.0, palette.preview_fill);
        paint_accent(&painter, block_rect, palette.preview_accent);
        paint_labels(&painter, block_rect, &preview.title, &preview.time_label, palette);
    }
}

fn paint_accent(painter: &egui::Painter, block_rect: Rect, color: egui::Color32) {
    let bar = Rect::from_min_size(block_rect.min, Vec2::new(ACCENT_WIDTH, block_rect.height()));
    painter.rect_filled(bar, 2.0, color);
}

fn paint_labels(
    painter: &egui::Painter,
    block_rect: Rect,
    title: &str,
    time_label: &str,
    palette: &GridPalette,
) {
    let text_left = block_rect.left() + ACCENT_WIDTH + 6.0;
    let text_painter = painter.with_clip_rect(block_rect.intersect(painter.clip_rect()));
    text_painter.text(
        Pos2::new(text_left, block_rect.top() + 2.0),
        Align2::LEFT_TOP,
        title,
        FontId::proportional(12.0),
        palette.entry_text,
    );
    text_painter.text(
        Pos2::new(text_left, block_rect.top() + 16.0),
        Align2::LEFT_TOP,
        time_label,
        FontId::proportional(11.0),
        palette.entry_subtext,
    );
}
