//! Builds the page snapshot from the domain dashboard.

use crate::domain::booking_session::{BookingSession, SessionState as DomainSessionState};
use crate::domain::grid_renderer::{
    BookingSlot as DomainBookingSlot, Grid, GridCell as DomainGridCell, GridHeader as DomainGridHeader,
};
use crate::domain::models::{weekday_name, HalfSelector};
use crate::domain::week_resolver::{WeekDayInfo, WeekView as DomainWeekView};
use crate::domain::DashboardSnapshot;
use shared::{
    BookingSlot, CalendarGrid, DashboardResponse, GridCell, GridHeader, GridRow, PendingBooking,
    SessionState, SessionView, SlotKind, WeekDay, WeekView,
};

use super::BookingMapper;

pub struct DashboardMapper;

impl DashboardMapper {
    pub fn to_dto(snapshot: &DashboardSnapshot) -> DashboardResponse {
        DashboardResponse {
            selected_date: snapshot.selected_date.format("%Y-%m-%d").to_string(),
            week: Self::week_to_dto(&snapshot.week),
            grid: Self::grid_to_dto(&snapshot.grid),
            session: Self::session_to_dto(&snapshot.session),
            slot_clicks: snapshot.slot_clicks,
        }
    }

    pub fn week_to_dto(week: &DomainWeekView) -> WeekView {
        WeekView {
            start_date: week.start.format("%Y-%m-%d").to_string(),
            days: week.days.iter().map(Self::day_to_dto).collect(),
        }
    }

    fn day_to_dto(day: &WeekDayInfo) -> WeekDay {
        WeekDay {
            weekday: weekday_name(day.weekday()).to_string(),
            date: day.date.format("%Y-%m-%d").to_string(),
            display_date: day.display_date(),
            day_type: day.day_type.to_string(),
            notes: day.notes.clone(),
            is_wednesday: day.is_wednesday,
            is_early_out: day.is_early_out(),
        }
    }

    pub fn grid_to_dto(grid: &Grid) -> CalendarGrid {
        CalendarGrid {
            headers: grid.headers.iter().map(Self::header_to_dto).collect(),
            rows: grid
                .rows
                .iter()
                .map(|row| GridRow {
                    period: row.period.clone(),
                    cells: row.cells.iter().map(Self::cell_to_dto).collect(),
                })
                .collect(),
        }
    }

    fn header_to_dto(header: &DomainGridHeader) -> GridHeader {
        let weekday = weekday_name(header.weekday).to_string();
        match &header.day {
            Some(day) => GridHeader {
                weekday,
                display_date: Some(day.display_date()),
                day_type: Some(day.day_type.to_string()),
                notes: Some(day.notes.clone()),
                highlight_notes: day.notes.contains(crate::domain::EARLY_OUT_MARKER),
            },
            None => GridHeader {
                weekday,
                display_date: None,
                day_type: None,
                notes: None,
                highlight_notes: false,
            },
        }
    }

    fn cell_to_dto(cell: &DomainGridCell) -> GridCell {
        match cell {
            DomainGridCell::Slots(slots) => GridCell::Slots {
                slots: slots.iter().map(Self::slot_to_dto).collect(),
            },
            DomainGridCell::NotAvailable => GridCell::NotAvailable,
            DomainGridCell::NoSchool => GridCell::NoSchool,
            DomainGridCell::Unscheduled { label } => GridCell::Unscheduled {
                label: label.clone(),
            },
        }
    }

    fn slot_to_dto(slot: &DomainBookingSlot) -> BookingSlot {
        BookingSlot {
            slot_id: slot.id.to_string(),
            kind: match slot.id.half {
                HalfSelector::First => SlotKind::FirstHalf,
                HalfSelector::Second => SlotKind::SecondHalf,
                HalfSelector::Entire => SlotKind::EntirePeriod,
            },
            label: slot.label.clone(),
            start: slot.start.to_string(),
            end: slot.end.to_string(),
        }
    }

    pub fn session_to_dto(session: &BookingSession) -> SessionView {
        SessionView {
            state: match session.state() {
                DomainSessionState::Idle => SessionState::Idle,
                DomainSessionState::SlotSelected => SessionState::SlotSelected,
                DomainSessionState::FormEditing => SessionState::FormEditing,
            },
            modal_open: session.is_modal_open(),
            pending: session.pending().map(|context| PendingBooking {
                slot_id: context.slot.to_string(),
                label: context.label.clone(),
                start: context.start.to_string(),
                end: context.end.to_string(),
            }),
            form: BookingMapper::form_to_dto(session.form()),
        }
    }
}
