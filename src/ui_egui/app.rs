use chrono::{Local, NaiveDate};
use egui_extras::DatePickerButton;

use super::day_grid::DayGrid;
use super::palette::parse_color;
use crate::models::settings::Settings;
use crate::services::entry::EntryStore;
use crate::services::settings::SettingsService;
use crate::services::time_grid::format::{format_day_total, format_range};
use crate::services::time_grid::DragMachine;

const SIDE_PANEL_WIDTH: f32 = 260.0;

pub struct PlannerApp {
    settings_service: Option<SettingsService>,
    settings: Settings,
    /// Working copy edited in the preferences section
    settings_draft: Settings,
    settings_error: Option<String>,
    current_date: NaiveDate,
    store: EntryStore,
    drag: DragMachine,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("planner_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Day Planner");
                ui.separator();
                self.render_date_controls(ui);
            });
        });

        egui::SidePanel::right("planner_day_summary")
            .default_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.render_day_summary(ui);
                ui.separator();
                self.render_preferences(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            // The grid draws the snapshot while commits land in the store.
            let entries = self.store.current_entries().to_vec();
            DayGrid::show(ui, &mut self.drag, self.current_date, &entries, &mut self.store);
        });
    }
}

impl PlannerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings_service: Option<SettingsService>,
        settings: Settings,
    ) -> Self {
        let current_date = Local::now().date_naive();
        Self {
            settings_service,
            drag: DragMachine::new(settings.entry_template()),
            settings_draft: settings.clone(),
            settings,
            settings_error: None,
            current_date,
            store: EntryStore::new(current_date),
        }
    }

    fn set_date(&mut self, date: NaiveDate) {
        if date == self.current_date {
            return;
        }
        log::debug!("Switching day to {}", date);
        self.current_date = date;
        self.store.set_current_date(date);
        self.drag.reset();
    }

    fn render_date_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("◀").on_hover_text("Previous day").clicked() {
            if let Some(date) = self.current_date.pred_opt() {
                self.set_date(date);
            }
        }
        if ui.button("Today").clicked() {
            self.set_date(Local::now().date_naive());
        }
        if ui.button("▶").on_hover_text("Next day").clicked() {
            if let Some(date) = self.current_date.succ_opt() {
                self.set_date(date);
            }
        }

        let mut picked = self.current_date;
        ui.add(DatePickerButton::new(&mut picked).id_source("planner_date_picker"));
        self.set_date(picked);
    }

    fn render_day_summary(&self, ui: &mut egui::Ui) {
        let entries = self.store.current_entries();
        ui.heading("Entries");
        ui.label(format!("Tracked: {}", format_day_total(entries)));
        ui.add_space(4.0);

        if entries.is_empty() {
            ui.weak("Drag across the grid to add an entry.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("planner_entry_list")
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                for entry in entries {
                    ui.horizontal(|ui| {
                        let color = parse_color(&entry.color).unwrap_or(egui::Color32::GRAY);
                        ui.colored_label(color, "■");
                        ui.label(&entry.title);
                        ui.weak(format_range(entry.start_time, entry.end_time));
                    });
                }
            });
    }

    fn render_preferences(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Preferences")
            .id_source("planner_preferences")
            .show(ui, |ui| {
                egui::Grid::new("planner_preferences_grid")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Entry title");
                        ui.text_edit_singleline(&mut self.settings_draft.default_entry_title);
                        ui.end_row();

                        ui.label("Entry color");
                        ui.text_edit_singleline(&mut self.settings_draft.default_entry_color);
                        ui.end_row();
                    });

                if ui.button("Save").clicked() {
                    self.save_settings();
                }
                if let Some(error) = &self.settings_error {
                    ui.colored_label(egui::Color32::from_rgb(220, 38, 38), error);
                }
            });
    }

    fn save_settings(&mut self) {
        if let Err(err) = self.settings_draft.validate() {
            self.settings_error = Some(err);
            return;
        }

        if let Some(service) = &self.settings_service {
            if let Err(err) = service.update(&self.settings_draft) {
                log::error!("Failed to save settings: {:#}", err);
                self.settings_error = Some(format!("{:#}", err));
                return;
            }
        }

        self.settings = self.settings_draft.clone();
        self.settings_error = None;
        self.drag.set_template(self.settings.entry_template());
        log::info!("Saved settings");
    }
}
