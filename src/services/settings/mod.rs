// Settings service
// Loads and saves user preferences

mod service;

pub use service::SettingsService;
