//! Identity of a bookable slot in the weekly grid.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Which part of a period a slot covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfSelector {
    First,
    Second,
    Entire,
}

impl HalfSelector {
    pub fn as_str(self) -> &'static str {
        match self {
            HalfSelector::First => "first",
            HalfSelector::Second => "second",
            HalfSelector::Entire => "entire",
        }
    }

    /// Upper-case caption used on the slot button
    pub fn caption(self) -> &'static str {
        match self {
            HalfSelector::First => "FIRST HALF",
            HalfSelector::Second => "SECOND HALF",
            HalfSelector::Entire => "ENTIRE PERIOD",
        }
    }
}

impl FromStr for HalfSelector {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(HalfSelector::First),
            "second" => Ok(HalfSelector::Second),
            "entire" => Ok(HalfSelector::Entire),
            _ => Err(()),
        }
    }
}

/// Full English weekday name ("Monday"); chrono's Display gives "Mon"
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Stable slot identity: the same (weekday, period, half) always yields the
/// same id, whatever week is displayed.
///
/// Text form is `<Weekday>|<period>|<half>`, e.g. `Monday|A1/B5|first`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub weekday: Weekday,
    pub period: String,
    pub half: HalfSelector,
}

impl SlotId {
    pub fn new(weekday: Weekday, period: impl Into<String>, half: HalfSelector) -> Self {
        Self {
            weekday,
            period: period.into(),
            half,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            weekday_name(self.weekday),
            self.period,
            self.half.as_str()
        )
    }
}

impl FromStr for SlotId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::MalformedSlotId(s.to_string());

        let (rest, half) = s.rsplit_once('|').ok_or_else(malformed)?;
        let (weekday, period) = rest.split_once('|').ok_or_else(malformed)?;
        if period.is_empty() {
            return Err(malformed());
        }

        let weekday: Weekday = weekday.parse().map_err(|_| malformed())?;
        let half: HalfSelector = half.parse().map_err(|_| malformed())?;
        Ok(SlotId::new(weekday, period, half))
    }
}
