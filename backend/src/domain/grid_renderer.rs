//! Lays out the weekly booking grid: one row per period, one column per
//! weekday, and up to three booking slots per cell.
//!
//! Rendering is a pure function of the week view and the two timetables.
//! Slot ids depend only on (weekday, period, half), so a dialog opened on a
//! slot keeps pointing at the same slot when the displayed week changes.

use chrono::Weekday;

use super::models::{HalfSelector, Period, PeriodStart, PeriodTable, SlotId, TimeOfDay};
use super::week_resolver::{WeekDayInfo, WeekView};

/// Grid columns, in display order
pub const GRID_WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSlot {
    pub id: SlotId,
    pub label: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Bookable halves and the entire period
    Slots(Vec<BookingSlot>),
    /// The period does not run that day
    NotAvailable,
    /// The weekday is outside the displayed window
    NoSchool,
    /// The period has no end time; shown but not bookable
    Unscheduled { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridHeader {
    pub weekday: Weekday,
    /// None when the weekday is outside the displayed window
    pub day: Option<WeekDayInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub period: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<GridHeader>,
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Look up a rendered slot by id
    pub fn find_slot(&self, id: &SlotId) -> Option<&BookingSlot> {
        let column = GRID_WEEKDAYS.iter().position(|w| *w == id.weekday)?;
        let row = self.rows.iter().find(|row| row.period == id.period)?;
        match row.cells.get(column)? {
            GridCell::Slots(slots) => slots.iter().find(|slot| slot.id == *id),
            _ => None,
        }
    }

    /// Every bookable slot in row-major order
    pub fn slots(&self) -> impl Iterator<Item = &BookingSlot> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter_map(|cell| match cell {
                GridCell::Slots(slots) => Some(slots.iter()),
                _ => None,
            })
            .flatten()
    }
}

/// Render the grid for `week`. Rows follow the regular table; an early-out
/// Wednesday takes each period's times from `early_out` by name.
pub fn render(week: &WeekView, regular: &PeriodTable, early_out: &PeriodTable) -> Grid {
    let headers = GRID_WEEKDAYS
        .iter()
        .map(|&weekday| GridHeader {
            weekday,
            day: week.day(weekday).cloned(),
        })
        .collect();

    let rows = regular
        .periods()
        .iter()
        .map(|period| {
            let cells = GRID_WEEKDAYS
                .iter()
                .map(|&weekday| match week.day(weekday) {
                    None => GridCell::NoSchool,
                    Some(day) => {
                        let times = if day.is_early_out() {
                            early_out.get(&period.name).unwrap_or(period)
                        } else {
                            period
                        };
                        period_cell(weekday, &period.name, times)
                    }
                })
                .collect();
            GridRow {
                period: period.name.clone(),
                cells,
            }
        })
        .collect();

    Grid { headers, rows }
}

fn period_cell(weekday: Weekday, period_name: &str, times: &Period) -> GridCell {
    let start = match times.start {
        PeriodStart::Unavailable => return GridCell::NotAvailable,
        PeriodStart::At(start) => start,
    };
    let Some(end) = times.end else {
        return GridCell::Unscheduled {
            label: format!("{} ({} - )", HalfSelector::Entire.caption(), start),
        };
    };

    let mid = start.midpoint(end);
    let slot = |half: HalfSelector, from: TimeOfDay, to: TimeOfDay| BookingSlot {
        id: SlotId::new(weekday, period_name, half),
        label: format!("{} ({} - {})", half.caption(), from, to),
        start: from,
        end: to,
    };

    GridCell::Slots(vec![
        slot(HalfSelector::First, start, mid),
        slot(HalfSelector::Second, mid, end),
        slot(HalfSelector::Entire, start, end),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule_store::ScheduleStore;
    use crate::domain::week_resolver::{parse_week_date, resolve_week};
    use crate::domain::models::ScheduleEntry;

    fn sample_grid(start: &str) -> Grid {
        let store = ScheduleStore::sample();
        let week = resolve_week(&store, parse_week_date(start).unwrap()).unwrap();
        render(&week, &PeriodTable::regular(), &PeriodTable::early_out())
    }

    fn column(weekday: Weekday) -> usize {
        GRID_WEEKDAYS.iter().position(|w| *w == weekday).unwrap()
    }

    fn cell<'a>(grid: &'a Grid, period: &str, weekday: Weekday) -> &'a GridCell {
        let row = grid.rows.iter().find(|r| r.period == period).unwrap();
        &row.cells[column(weekday)]
    }

    fn labels(cell: &GridCell) -> Vec<&str> {
        match cell {
            GridCell::Slots(slots) => slots.iter().map(|s| s.label.as_str()).collect(),
            other => panic!("expected slots, got {other:?}"),
        }
    }

    #[test]
    fn test_three_slots_per_regular_cell() {
        let grid = sample_grid("2025-08-18");
        assert_eq!(grid.rows.len(), 6);
        assert!(grid.rows.iter().all(|r| r.cells.len() == 5));

        assert_eq!(
            labels(cell(&grid, "A1/B5", Weekday::Mon)),
            vec![
                "FIRST HALF (08:15 - 08:55)",
                "SECOND HALF (08:55 - 09:35)",
                "ENTIRE PERIOD (08:15 - 09:35)",
            ]
        );
    }

    #[test]
    fn test_early_out_wednesday_uses_early_table() {
        let grid = sample_grid("2025-08-18");

        // 08:15-09:25 -> 35 minutes each half
        assert_eq!(
            labels(cell(&grid, "A1/B5", Weekday::Wed)),
            vec![
                "FIRST HALF (08:15 - 08:50)",
                "SECOND HALF (08:50 - 09:25)",
                "ENTIRE PERIOD (08:15 - 09:25)",
            ]
        );
        assert_eq!(*cell(&grid, "Den Time", Weekday::Wed), GridCell::NotAvailable);
        assert_eq!(
            labels(cell(&grid, "After School", Weekday::Wed))[2],
            "ENTIRE PERIOD (13:15 - 13:45)"
        );

        // Other days that week keep the regular table
        assert_eq!(
            labels(cell(&grid, "After School", Weekday::Thu))[2],
            "ENTIRE PERIOD (14:45 - 15:30)"
        );
        assert!(matches!(cell(&grid, "Den Time", Weekday::Tue), GridCell::Slots(_)));
    }

    #[test]
    fn test_plain_wednesday_uses_regular_table() {
        let grid = sample_grid("2025-08-25");
        assert_eq!(
            labels(cell(&grid, "A1/B5", Weekday::Wed))[2],
            "ENTIRE PERIOD (08:15 - 09:35)"
        );
        assert!(matches!(cell(&grid, "Den Time", Weekday::Wed), GridCell::Slots(_)));
    }

    #[test]
    fn test_early_out_marker_on_other_weekday_is_ignored() {
        let mut store = ScheduleStore::sample();
        let thursday = parse_week_date("2025-08-21").unwrap();
        store.upsert(ScheduleEntry::new(thursday, "B Day", "Early Out"));

        let week = resolve_week(&store, parse_week_date("2025-08-18").unwrap()).unwrap();
        let grid = render(&week, &PeriodTable::regular(), &PeriodTable::early_out());
        assert!(matches!(cell(&grid, "Den Time", Weekday::Thu), GridCell::Slots(_)));
    }

    #[test]
    fn test_unavailable_period_has_no_slots() {
        let grid = sample_grid("2025-08-18");
        assert_eq!(*cell(&grid, "Den Time", Weekday::Wed), GridCell::NotAvailable);
        assert!(grid
            .slots()
            .all(|slot| !(slot.id.weekday == Weekday::Wed && slot.id.period == "Den Time")));
    }

    #[test]
    fn test_regular_unavailable_period_renders_single_cell() {
        let regular = PeriodTable::new(vec![Period {
            name: "Assembly".to_string(),
            start: PeriodStart::Unavailable,
            end: None,
            is_regular: true,
        }]);
        let store = ScheduleStore::sample();
        let week = resolve_week(&store, parse_week_date("2025-08-18").unwrap()).unwrap();
        let grid = render(&week, &regular, &PeriodTable::early_out());

        assert_eq!(grid.rows.len(), 1);
        assert!(grid.rows[0].cells.iter().all(|c| *c == GridCell::NotAvailable));
        assert_eq!(grid.slots().count(), 0);
    }

    #[test]
    fn test_period_without_end_is_unscheduled() {
        let regular = PeriodTable::new(vec![Period {
            name: "Open Lab".to_string(),
            start: PeriodStart::At(TimeOfDay::from_hm(15, 30).unwrap()),
            end: None,
            is_regular: true,
        }]);
        let store = ScheduleStore::sample();
        let week = resolve_week(&store, parse_week_date("2025-08-18").unwrap()).unwrap();
        let grid = render(&week, &regular, &PeriodTable::early_out());

        assert_eq!(
            grid.rows[0].cells[0],
            GridCell::Unscheduled {
                label: "ENTIRE PERIOD (15:30 - )".to_string()
            }
        );
    }

    #[test]
    fn test_period_missing_from_early_table_keeps_regular_times() {
        let early_out: Vec<Period> = PeriodTable::early_out()
            .periods()
            .iter()
            .filter(|p| p.name != "A3/B7")
            .cloned()
            .collect();
        let early_out = PeriodTable::new(early_out);
        let store = ScheduleStore::sample();
        let week = resolve_week(&store, parse_week_date("2025-08-18").unwrap()).unwrap();
        let grid = render(&week, &PeriodTable::regular(), &early_out);

        // Early-out Wednesday, but A3/B7 has no compressed times
        assert_eq!(
            labels(cell(&grid, "A3/B7", Weekday::Wed)),
            vec![
                "FIRST HALF (12:10 - 12:47)",
                "SECOND HALF (12:47 - 13:25)",
                "ENTIRE PERIOD (12:10 - 13:25)",
            ]
        );
        assert_eq!(
            labels(cell(&grid, "A4/B8", Weekday::Wed))[2],
            "ENTIRE PERIOD (12:05 - 13:15)"
        );
    }

    #[test]
    fn test_weekdays_outside_window_show_no_school() {
        let grid = sample_grid("2025-08-21");
        assert_eq!(*cell(&grid, "A1/B5", Weekday::Tue), GridCell::NoSchool);
        assert_eq!(*cell(&grid, "A1/B5", Weekday::Wed), GridCell::NoSchool);
        assert!(grid.headers[column(Weekday::Tue)].day.is_none());
        assert!(matches!(cell(&grid, "A1/B5", Weekday::Mon), GridCell::Slots(_)));
    }

    #[test]
    fn test_slot_ids_are_unique_and_stable() {
        let grid = sample_grid("2025-08-18");
        let ids: Vec<String> = grid.slots().map(|s| s.id.to_string()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
        // 6 periods x 5 days x 3 slots, minus the early-out Den Time
        assert_eq!(ids.len(), 6 * 5 * 3 - 3);

        let next_week = sample_grid("2025-08-25");
        let id = SlotId::new(Weekday::Mon, "A2/B6", HalfSelector::Second);
        assert_eq!(grid.find_slot(&id).unwrap().id, next_week.find_slot(&id).unwrap().id);
    }

    #[test]
    fn test_find_slot() {
        let grid = sample_grid("2025-08-18");
        let id = SlotId::new(Weekday::Fri, "A3/B7", HalfSelector::Second);
        let slot = grid.find_slot(&id).unwrap();
        assert_eq!(slot.start.to_string(), "12:47");
        assert_eq!(slot.end.to_string(), "13:25");

        let missing = SlotId::new(Weekday::Wed, "Den Time", HalfSelector::First);
        assert!(grid.find_slot(&missing).is_none());
        let unknown = SlotId::new(Weekday::Mon, "Lunch", HalfSelector::First);
        assert!(grid.find_slot(&unknown).is_none());
    }
}
