//! Resolves the five-day window shown in the grid.
//!
//! The window starts at whatever date the caller picks. It is not snapped to
//! Monday: starting on a Thursday yields Thursday through the following
//! Monday, and the grid then shows "No School" for the weekdays not covered.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::error::DomainError;
use super::models::{DayType, ScheduleEntry};
use super::schedule_store::ScheduleStore;

pub const DAYS_PER_WEEK_VIEW: i64 = 5;

/// Notes marker that switches a Wednesday to the early-out timetable
pub const EARLY_OUT_MARKER: &str = "Early Out";

/// Schedule information for one day of the displayed window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDayInfo {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub notes: String,
    pub is_wednesday: bool,
}

impl WeekDayInfo {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Short date for the grid header, e.g. "08/18"
    pub fn display_date(&self) -> String {
        self.date.format("%m/%d").to_string()
    }

    /// Wednesday whose notes mention an early out
    pub fn is_early_out(&self) -> bool {
        self.is_wednesday && self.notes.contains(EARLY_OUT_MARKER)
    }
}

/// Five consecutive days starting at `start`. Never stored; rebuilt on
/// every date change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekView {
    pub start: NaiveDate,
    pub days: Vec<WeekDayInfo>,
}

impl WeekView {
    /// Info for a weekday, if that weekday falls inside the window
    pub fn day(&self, weekday: Weekday) -> Option<&WeekDayInfo> {
        self.days.iter().find(|d| d.weekday() == weekday)
    }
}

/// Build the week view for the five days starting at `start`. Dates missing
/// from the store default to "No School" with empty notes. Fails when the
/// window would run past the last representable date.
pub fn resolve_week(store: &ScheduleStore, start: NaiveDate) -> Result<WeekView, DomainError> {
    let days = (0..DAYS_PER_WEEK_VIEW)
        .map(|offset| {
            let date = start
                .checked_add_signed(Duration::days(offset))
                .ok_or(DomainError::DateOutOfRange(start))?;
            let (day_type, notes) = match store.get(date) {
                Some(ScheduleEntry { day_type, notes, .. }) => (day_type.clone(), notes.clone()),
                None => (DayType::NoSchool, String::new()),
            };
            Ok(WeekDayInfo {
                date,
                day_type,
                notes,
                is_wednesday: date.weekday() == Weekday::Wed,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(WeekView { start, days })
}

/// Parse a `YYYY-MM-DD` week start chosen by the user
pub fn parse_week_date(input: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(input.to_string()))
}

/// Monday on or before `date`
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = Duration::days(i64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_signed(back).unwrap_or(date)
}

/// Move a week start by whole weeks
pub fn shift_week(date: NaiveDate, weeks: i64) -> Result<NaiveDate, DomainError> {
    date.checked_add_signed(Duration::weeks(weeks))
        .ok_or(DomainError::DateOutOfRange(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_week_date(s).unwrap()
    }

    #[test]
    fn test_resolve_sample_week() {
        let store = ScheduleStore::sample();
        let week = resolve_week(&store, date("2025-08-18")).unwrap();

        assert_eq!(week.days.len(), 5);
        let summary: Vec<(Weekday, &str, &str)> = week
            .days
            .iter()
            .map(|d| (d.weekday(), d.day_type.as_str(), d.notes.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Weekday::Mon, "A Day", ""),
                (Weekday::Tue, "B Day", ""),
                (Weekday::Wed, "A Day", "Early Out"),
                (Weekday::Thu, "B Day", ""),
                (Weekday::Fri, "A Day", ""),
            ]
        );

        let wednesday = week.day(Weekday::Wed).unwrap();
        assert!(wednesday.is_wednesday);
        assert!(wednesday.is_early_out());
        assert_eq!(wednesday.display_date(), "08/20");
        assert!(!week.day(Weekday::Thu).unwrap().is_early_out());
    }

    #[test]
    fn test_unscheduled_days_default_to_no_school() {
        let store = ScheduleStore::sample();
        // Labor Day week: Monday 2025-09-01 is not in the table
        let week = resolve_week(&store, date("2025-09-01")).unwrap();
        let monday = week.day(Weekday::Mon).unwrap();
        assert_eq!(monday.day_type, DayType::NoSchool);
        assert_eq!(monday.notes, "");
        assert_eq!(week.day(Weekday::Tue).unwrap().day_type, DayType::BDay);

        let empty = ScheduleStore::new();
        let week = resolve_week(&empty, date("2030-01-07")).unwrap();
        assert_eq!(week.days.len(), 5);
        assert!(week.days.iter().all(|d| d.day_type == DayType::NoSchool));
    }

    #[test]
    fn test_every_start_date_yields_five_days() {
        let store = ScheduleStore::sample();
        let mut start = date("2025-08-01");
        for _ in 0..60 {
            let week = resolve_week(&store, start).unwrap();
            assert_eq!(week.days.len(), 5);
            assert_eq!(week.days[0].date, start);
            assert_eq!(week.days[4].date, start + Duration::days(4));
            start += Duration::days(1);
        }
    }

    #[test]
    fn test_non_monday_start_is_not_snapped() {
        let store = ScheduleStore::sample();
        let week = resolve_week(&store, date("2025-08-21")).unwrap();

        assert_eq!(week.days[0].weekday(), Weekday::Thu);
        assert!(week.day(Weekday::Tue).is_none());
        assert!(week.day(Weekday::Wed).is_none());
        // The Monday in view is the following one
        assert_eq!(week.day(Weekday::Mon).unwrap().date, date("2025-08-25"));
    }

    #[test]
    fn test_wednesday_without_marker_is_regular() {
        let store = ScheduleStore::sample();
        let week = resolve_week(&store, date("2025-08-25")).unwrap();
        let wednesday = week.day(Weekday::Wed).unwrap();
        assert!(wednesday.is_wednesday);
        assert!(!wednesday.is_early_out());
    }

    #[test]
    fn test_date_helpers() {
        assert!(matches!(
            parse_week_date("08/18/2025"),
            Err(DomainError::InvalidDate(_))
        ));
        assert!(parse_week_date("2025-02-30").is_err());
        assert_eq!(monday_of(date("2025-08-20")), date("2025-08-18"));
        assert_eq!(monday_of(date("2025-08-18")), date("2025-08-18"));
        assert_eq!(monday_of(date("2025-08-24")), date("2025-08-18"));
        assert_eq!(shift_week(date("2025-08-18"), 1), Ok(date("2025-08-25")));
        assert_eq!(shift_week(date("2025-08-21"), -1), Ok(date("2025-08-14")));
    }

    #[test]
    fn test_window_past_last_date_is_rejected() {
        let store = ScheduleStore::sample();
        let last = NaiveDate::MAX;
        assert_eq!(parse_week_date(&last.format("%Y-%m-%d").to_string()), Ok(last));

        // Four days before the end still fits; three does not
        let fits = last - Duration::days(4);
        assert_eq!(resolve_week(&store, fits).unwrap().days[4].date, last);
        let overflows = last - Duration::days(3);
        assert_eq!(
            resolve_week(&store, overflows),
            Err(DomainError::DateOutOfRange(overflows))
        );

        assert_eq!(shift_week(last, 1), Err(DomainError::DateOutOfRange(last)));
        assert_eq!(
            shift_week(NaiveDate::MIN, -1),
            Err(DomainError::DateOutOfRange(NaiveDate::MIN))
        );
        assert_eq!(monday_of(NaiveDate::MIN), NaiveDate::MIN);
    }
}
