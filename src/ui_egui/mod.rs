mod app;
pub mod day_grid;
mod palette;

pub use app::PlannerApp;
