//! Schedule entries: which kind of school day a calendar date is.

use chrono::NaiveDate;
use std::fmt;

/// Day-type label attached to a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayType {
    ADay,
    BDay,
    NoSchool,
    /// Any other label found in the imported sheet, kept verbatim
    Custom(String),
}

impl DayType {
    pub fn as_str(&self) -> &str {
        match self {
            DayType::ADay => "A Day",
            DayType::BDay => "B Day",
            DayType::NoSchool => "No School",
            DayType::Custom(label) => label,
        }
    }
}

impl From<&str> for DayType {
    fn from(label: &str) -> Self {
        match label.trim() {
            "A Day" => DayType::ADay,
            "B Day" => DayType::BDay,
            "No School" => DayType::NoSchool,
            other => DayType::Custom(other.to_string()),
        }
    }
}

impl From<String> for DayType {
    fn from(label: String) -> Self {
        DayType::from(label.as_str())
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schedule information for a single date. Unique per date in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub notes: String,
}

impl ScheduleEntry {
    pub fn new(date: NaiveDate, day_type: impl Into<DayType>, notes: impl Into<String>) -> Self {
        Self {
            date,
            day_type: day_type.into(),
            notes: notes.into(),
        }
    }
}
