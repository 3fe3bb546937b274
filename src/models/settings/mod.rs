// Settings module
// User preferences persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::entry::{
    validate_color, EntryTemplate, DEFAULT_ENTRY_COLOR, DEFAULT_ENTRY_TITLE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_entry_title")]
    pub default_entry_title: String,
    #[serde(default = "default_entry_color")]
    pub default_entry_color: String,
    /// `env_logger` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_entry_title() -> String {
    DEFAULT_ENTRY_TITLE.to_string()
}

fn default_entry_color() -> String {
    DEFAULT_ENTRY_COLOR.to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_entry_title: default_entry_title(),
            default_entry_color: default_entry_color(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_entry_title.trim().is_empty() {
            return Err("Default entry title cannot be empty".to_string());
        }
        validate_color(&self.default_entry_color).map_err(|e| e.to_string())
    }

    /// Template for drag-created entries, falling back to the built-in one
    /// when the stored preferences are unusable.
    pub fn entry_template(&self) -> EntryTemplate {
        if let Err(err) = self.validate() {
            log::warn!("Ignoring entry defaults from settings: {}", err);
            return EntryTemplate::default();
        }
        EntryTemplate::new(
            self.default_entry_title.clone(),
            self.default_entry_color.clone(),
        )
        .unwrap_or_default()
    }
}
