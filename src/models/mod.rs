// Module exports for models

pub mod entry;
pub mod error;
pub mod settings;
pub mod time_slot;
