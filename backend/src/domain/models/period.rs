//! Class periods and the times they run at.

use chrono::{NaiveTime, TimeDelta, Timelike};
use std::fmt;

/// A wall-clock time with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub const fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => Some(Self(time)),
            None => None,
        }
    }

    /// Minutes since midnight
    pub fn minutes(self) -> u32 {
        Timelike::num_seconds_from_midnight(&self.0) / 60
    }

    /// Halfway point between `self` and `end`, truncated to the whole minute
    /// below. 08:15 and 09:35 give 08:55.
    pub fn midpoint(self, end: TimeOfDay) -> TimeOfDay {
        let span = i64::from(end.minutes()) - i64::from(self.minutes());
        TimeOfDay(self.0 + TimeDelta::minutes(span.div_euclid(2)))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Start of a period, or the "Not Available" marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodStart {
    At(TimeOfDay),
    Unavailable,
}

/// A named block of the school day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub name: String,
    pub start: PeriodStart,
    /// None when the table leaves the end blank
    pub end: Option<TimeOfDay>,
    /// False for rows of the early-out timetable
    pub is_regular: bool,
}

/// Ordered list of periods making up one timetable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTable {
    periods: Vec<Period>,
}

// Only used to build the const tables below, so a bad literal fails the build
const fn hm(hour: u32, minute: u32) -> TimeOfDay {
    match TimeOfDay::from_hm(hour, minute) {
        Some(time) => time,
        None => panic!("invalid period time"),
    }
}

const fn at(hour: u32, minute: u32) -> PeriodStart {
    PeriodStart::At(hm(hour, minute))
}

type PeriodRow = (&'static str, PeriodStart, Option<TimeOfDay>);

const REGULAR_TIMES: [PeriodRow; 6] = [
    ("A1/B5", at(8, 15), Some(hm(9, 35))),
    ("Den Time", at(9, 30), Some(hm(10, 15))),
    ("A2/B6", at(10, 20), Some(hm(11, 35))),
    ("A3/B7", at(12, 10), Some(hm(13, 25))),
    ("A4/B8", at(13, 30), Some(hm(14, 45))),
    ("After School", at(14, 45), Some(hm(15, 30))),
];

const EARLY_OUT_TIMES: [PeriodRow; 6] = [
    ("A1/B5", at(8, 15), Some(hm(9, 25))),
    ("Den Time", PeriodStart::Unavailable, None),
    ("A2/B6", at(9, 30), Some(hm(10, 40))),
    ("A3/B7", at(10, 50), Some(hm(12, 0))),
    ("A4/B8", at(12, 5), Some(hm(13, 15))),
    ("After School", at(13, 15), Some(hm(13, 45))),
];

impl PeriodTable {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    fn from_rows(rows: &[PeriodRow], is_regular: bool) -> Self {
        let periods = rows
            .iter()
            .map(|&(name, start, end)| Period {
                name: name.to_string(),
                start,
                end,
                is_regular,
            })
            .collect();
        Self::new(periods)
    }

    /// The everyday timetable
    pub fn regular() -> Self {
        Self::from_rows(&REGULAR_TIMES, true)
    }

    /// The compressed Wednesday timetable
    pub fn early_out() -> Self {
        Self::from_rows(&EARLY_OUT_TIMES, false)
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn get(&self, name: &str) -> Option<&Period> {
        self.periods.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
