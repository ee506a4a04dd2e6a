//! In-memory schedule: calendar date -> day type and notes.
//!
//! Starts from a built-in sample table and can be refreshed from an external
//! sheet (see `storage::schedule_source`). Imported rows overwrite whatever
//! was stored for the same date.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use super::models::ScheduleEntry;

/// (date, day type, notes) rows of the built-in sample schedule
const SAMPLE_SCHEDULE: [(&str, &str, &str); 17] = [
    ("2025-08-14", "A Day", "First Day of School"),
    ("2025-08-15", "B Day", ""),
    ("2025-08-18", "A Day", ""),
    ("2025-08-19", "B Day", ""),
    ("2025-08-20", "A Day", "Early Out"),
    ("2025-08-21", "B Day", ""),
    ("2025-08-22", "A Day", ""),
    ("2025-08-25", "B Day", ""),
    ("2025-08-26", "A Day", ""),
    ("2025-08-27", "B Day", ""),
    ("2025-08-28", "A Day", ""),
    ("2025-08-29", "B Day", ""),
    ("2025-09-02", "B Day", ""),
    ("2025-09-03", "A Day", ""),
    ("2025-09-04", "B Day", ""),
    ("2025-09-05", "A Day", ""),
    ("2025-09-08", "B Day", ""),
];

#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    entries: BTreeMap<NaiveDate, ScheduleEntry>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the sample schedule for August/September 2025
    pub fn sample() -> Self {
        let mut store = Self::new();
        for (date, day_type, notes) in SAMPLE_SCHEDULE {
            // rows are literals; a typo here is caught by test_sample_table
            if let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                store.upsert(ScheduleEntry::new(date, day_type, notes));
            }
        }
        store
    }

    pub fn get(&self, date: NaiveDate) -> Option<&ScheduleEntry> {
        self.entries.get(&date)
    }

    /// Insert or replace the entry for `entry.date`
    pub fn upsert(&mut self, entry: ScheduleEntry) {
        if let Some(previous) = self.entries.insert(entry.date, entry) {
            debug!("Replaced schedule entry for {}", previous.date);
        }
    }

    /// Upsert every entry and return how many were applied
    pub fn upsert_all(&mut self, entries: impl IntoIterator<Item = ScheduleEntry>) -> usize {
        let mut applied = 0;
        for entry in entries {
            self.upsert(entry);
            applied += 1;
        }
        applied
    }

    /// All entries in date order
    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
