// Day Planner Application
// Main entry point

use anyhow::anyhow;
use day_planner::models::settings::Settings;
use day_planner::services::settings::SettingsService;
use day_planner::ui_egui::PlannerApp;

fn main() -> eframe::Result<()> {
    let service = SettingsService::new();
    let loaded = match &service {
        Ok(service) => service.get(),
        Err(err) => Err(anyhow!("{:#}", err)),
    };
    let log_filter = loaded
        .as_ref()
        .map(|settings| settings.log_filter.clone())
        .unwrap_or_else(|_| Settings::default().log_filter);

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter)).init();

    log::info!("Starting Day Planner");

    let settings = loaded.unwrap_or_else(|err| {
        log::error!("Failed to load settings, using defaults: {:#}", err);
        Settings::default()
    });
    let service = service.ok();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([720.0, 640.0])
            .with_title("Day Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "Day Planner",
        options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc, service, settings)))),
    )
}
