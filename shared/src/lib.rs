//! Wire types shared between the library calendar server and its page.
//!
//! Everything here is plain serde data. The server owns every rule about
//! schedules, grids and bookings; these structs only carry the results.

use serde::{Deserialize, Serialize};

/// One school day as resolved for the displayed week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDay {
    /// Full weekday name, e.g. "Monday"
    pub weekday: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Short date shown in the grid header (MM/DD)
    pub display_date: String,
    /// "A Day", "B Day", "No School" or a custom label
    pub day_type: String,
    pub notes: String,
    pub is_wednesday: bool,
    /// True when the compressed Wednesday timetable applies
    pub is_early_out: bool,
}

/// Five consecutive days starting at the selected date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekView {
    pub start_date: String,
    pub days: Vec<WeekDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    FirstHalf,
    SecondHalf,
    EntirePeriod,
}

/// A clickable booking affordance inside a grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSlot {
    /// Stable identity, "<Weekday>|<period>|<first|second|entire>"
    pub slot_id: String,
    pub kind: SlotKind,
    pub label: String,
    pub start: String,
    pub end: String,
}

/// Content of one (period, weekday) cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridCell {
    Slots { slots: Vec<BookingSlot> },
    NotAvailable,
    NoSchool,
    /// Period without a usable time range; shown but not bookable
    Unscheduled { label: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridHeader {
    pub weekday: String,
    pub display_date: Option<String>,
    pub day_type: Option<String>,
    pub notes: Option<String>,
    /// Notes mention an early out and should be highlighted
    pub highlight_notes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub period: String,
    pub cells: Vec<GridCell>,
}

/// Periods x weekdays display grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub headers: Vec<GridHeader>,
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    SlotSelected,
    FormEditing,
}

/// Slot the open booking dialog refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingBooking {
    pub slot_id: String,
    pub label: String,
    pub start: String,
    pub end: String,
}

/// Booking dialog fields. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub teacher_name: String,
    pub subject: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub state: SessionState,
    pub modal_open: bool,
    pub pending: Option<PendingBooking>,
    pub form: BookingForm,
}

/// Everything the page needs to redraw itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub selected_date: String,
    pub week: WeekView,
    pub grid: CalendarGrid,
    pub session: SessionView,
    /// Number of slot clicks since startup (informational)
    pub slot_clicks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectWeekRequest {
    /// Date the week starts at (YYYY-MM-DD); not snapped to Monday
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotClickRequest {
    pub slot_id: String,
}

/// A confirmed booking as kept in the in-memory ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub teacher_name: String,
    pub subject: String,
    pub notes: String,
    pub slot_id: String,
    pub start: String,
    pub end: String,
    /// RFC 3339 timestamp
    pub confirmed_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmBookingResponse {
    pub dashboard: DashboardResponse,
    /// None when there was no pending slot to book
    pub booking: Option<BookingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// YYYY-MM-DD
    pub date: String,
    pub day_type: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleListResponse {
    pub entries: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReloadScheduleResponse {
    /// Rows merged into the schedule
    pub loaded: usize,
    /// Rows dropped because their date could not be parsed
    pub skipped: usize,
    /// Schedule size after the merge
    pub total: usize,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_form_missing_fields_default_to_empty() {
        let form: BookingForm = serde_json::from_str(r#"{"teacher_name":"Ms. Rivera"}"#).unwrap();
        assert_eq!(form.teacher_name, "Ms. Rivera");
        assert_eq!(form.subject, "");
        assert_eq!(form.notes, "");
    }

    #[test]
    fn test_grid_cell_is_tagged() {
        let json = serde_json::to_value(GridCell::NotAvailable).unwrap();
        assert_eq!(json["type"], "not_available");

        let json = serde_json::to_value(GridCell::Unscheduled {
            label: "ENTIRE PERIOD (08:15 - )".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "unscheduled");
        assert_eq!(json["label"], "ENTIRE PERIOD (08:15 - )");
    }
}
