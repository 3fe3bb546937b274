// Service module exports

pub mod entry;
pub mod settings;
pub mod time_grid;
