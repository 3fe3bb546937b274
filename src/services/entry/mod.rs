// Entry service
// In-memory per-day entry lists owned by the application

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::models::entry::{CalendarEntry, NewEntry};
use crate::services::time_grid::EntrySink;

/// Holds the entries of each day and gives new entries their identity.
///
/// Nothing here outlives the process.
#[derive(Debug)]
pub struct EntryStore {
    current_date: NaiveDate,
    entries: BTreeMap<NaiveDate, Vec<CalendarEntry>>,
    id_seed: i64,
    next_id: u64,
}

impl EntryStore {
    pub fn new(current_date: NaiveDate) -> Self {
        Self::with_id_seed(current_date, Local::now().timestamp_millis())
    }

    /// Deterministic ids for tests: `<seed>-<counter>`.
    pub fn with_id_seed(current_date: NaiveDate, id_seed: i64) -> Self {
        Self {
            current_date,
            entries: BTreeMap::new(),
            id_seed,
            next_id: 0,
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn entries_for(&self, date: NaiveDate) -> &[CalendarEntry] {
        self.entries.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn current_entries(&self) -> &[CalendarEntry] {
        self.entries_for(self.current_date)
    }

    /// Store an entry for `date`, returning the id it was given.
    pub fn insert(&mut self, date: NaiveDate, entry: NewEntry) -> String {
        let id = format!("{}-{}", self.id_seed, self.next_id);
        self.next_id += 1;
        let entry = entry.with_id(id.clone());
        if let Err(err) = entry.validate() {
            log::warn!("Storing entry {} that fails validation: {}", id, err);
        }
        self.entries.entry(date).or_default().push(entry);
        id
    }
}

impl EntrySink for EntryStore {
    fn on_entry_create(&mut self, entry: NewEntry) {
        let id = self.insert(self.current_date, entry);
        log::info!("Created entry {} on {}", id, self.current_date);
    }
}
