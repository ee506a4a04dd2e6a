//! UI events and the dispatch table that applies them to the dashboard.
//!
//! [`Dashboard`] is the single owned state object: the schedule, both
//! timetables, the selected week and the booking session. [`dispatch`] maps
//! each [`UiEvent`] to a state transition plus the side effects the caller
//! must carry out. Failed events leave the dashboard unchanged.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use super::booking_session::BookingSession;
use super::error::DomainError;
use super::grid_renderer::{self, Grid};
use super::models::{BookingContext, BookingForm, CompletedBooking, PeriodTable, ScheduleEntry, SlotId};
use super::schedule_store::ScheduleStore;
use super::week_resolver::{self, WeekView};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Date picker changed (YYYY-MM-DD)
    DateChanged(String),
    PreviousWeek,
    NextWeek,
    /// A booking slot was pressed
    SlotClicked(String),
    /// Dialog fields changed
    FormEdited(BookingForm),
    CancelPressed,
    ConfirmPressed(BookingForm),
    /// Fresh rows from the external sheet, already normalized
    ScheduleReloaded(Vec<ScheduleEntry>),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::DateChanged(_) => "date_changed",
            UiEvent::PreviousWeek => "previous_week",
            UiEvent::NextWeek => "next_week",
            UiEvent::SlotClicked(_) => "slot_clicked",
            UiEvent::FormEdited(_) => "form_edited",
            UiEvent::CancelPressed => "cancel_pressed",
            UiEvent::ConfirmPressed(_) => "confirm_pressed",
            UiEvent::ScheduleReloaded(_) => "schedule_reloaded",
        }
    }
}

/// Work the event loop performs after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    BookingCompleted(CompletedBooking),
}

/// Read-only copy of the dashboard handed to callers
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub selected_date: NaiveDate,
    pub week: WeekView,
    pub grid: Grid,
    pub session: BookingSession,
    pub slot_clicks: u32,
}

pub struct Dashboard {
    store: ScheduleStore,
    regular: PeriodTable,
    early_out: PeriodTable,
    selected_date: NaiveDate,
    week: WeekView,
    grid: Grid,
    session: BookingSession,
    slot_clicks: u32,
}

impl Dashboard {
    pub fn new(
        store: ScheduleStore,
        regular: PeriodTable,
        early_out: PeriodTable,
        selected_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let week = week_resolver::resolve_week(&store, selected_date)?;
        let grid = grid_renderer::render(&week, &regular, &early_out);
        Ok(Self {
            store,
            regular,
            early_out,
            selected_date,
            week,
            grid,
            session: BookingSession::new(),
            slot_clicks: 0,
        })
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            selected_date: self.selected_date,
            week: self.week.clone(),
            grid: self.grid.clone(),
            session: self.session.clone(),
            slot_clicks: self.slot_clicks,
        }
    }

    /// Re-run the week resolver and grid renderer for `date`. Nothing changes
    /// when the week cannot be resolved.
    fn select_week(&mut self, date: NaiveDate) -> Result<(), DomainError> {
        let week = week_resolver::resolve_week(&self.store, date)?;
        self.grid = grid_renderer::render(&week, &self.regular, &self.early_out);
        self.week = week;
        self.selected_date = date;
        Ok(())
    }
}

/// Apply one event. Date changes never touch the booking session.
pub fn dispatch(dashboard: &mut Dashboard, event: UiEvent) -> Result<Vec<SideEffect>, DomainError> {
    debug!("Dispatching {}", event.name());

    match event {
        UiEvent::DateChanged(input) => {
            let date = week_resolver::parse_week_date(&input)?;
            dashboard.select_week(date)?;
            info!("📅 Showing week starting {}", date);
        }
        UiEvent::PreviousWeek => {
            let date = week_resolver::shift_week(dashboard.selected_date, -1)?;
            dashboard.select_week(date)?;
            info!("📅 Stepped back to week starting {}", date);
        }
        UiEvent::NextWeek => {
            let date = week_resolver::shift_week(dashboard.selected_date, 1)?;
            dashboard.select_week(date)?;
            info!("📅 Stepped forward to week starting {}", date);
        }
        UiEvent::SlotClicked(raw_id) => {
            let id: SlotId = raw_id.parse()?;
            let slot = dashboard
                .grid
                .find_slot(&id)
                .ok_or_else(|| DomainError::UnknownSlot(raw_id.clone()))?;
            let context = BookingContext {
                slot: slot.id.clone(),
                label: slot.label.clone(),
                start: slot.start,
                end: slot.end,
            };
            dashboard.slot_clicks = dashboard.slot_clicks.saturating_add(1);
            info!(
                "🖱️ Slot {} clicked ({} clicks so far)",
                context.slot, dashboard.slot_clicks
            );
            dashboard.session.select_slot(context);
        }
        UiEvent::FormEdited(form) => {
            dashboard.session.edit_form(form);
        }
        UiEvent::CancelPressed => {
            dashboard.session.cancel();
            debug!("Booking dialog cancelled");
        }
        UiEvent::ConfirmPressed(form) => {
            if let Some(booking) = dashboard.session.confirm(form, Utc::now()) {
                return Ok(vec![SideEffect::BookingCompleted(booking)]);
            }
            debug!("Confirm pressed without a pending slot; fields cleared");
        }
        UiEvent::ScheduleReloaded(entries) => {
            let applied = dashboard.store.upsert_all(entries);
            dashboard.select_week(dashboard.selected_date)?;
            info!(
                "📋 Merged {} schedule rows, {} dates known",
                applied,
                dashboard.store.len()
            );
        }
    }

    Ok(Vec::new())
}
