//! Booking dialog data and confirmed bookings.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::period::TimeOfDay;
use super::slot::SlotId;

/// Values typed into the booking dialog. Accepted as-is, blanks included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub teacher_name: String,
    pub subject: String,
    pub notes: String,
}

impl BookingForm {
    pub fn is_blank(&self) -> bool {
        self.teacher_name.is_empty() && self.subject.is_empty() && self.notes.is_empty()
    }
}

/// The slot an open dialog is booking, with the time range it covered when
/// it was clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingContext {
    pub slot: SlotId,
    pub label: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// A booking the user confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedBooking {
    pub id: Uuid,
    pub teacher_name: String,
    pub subject: String,
    pub notes: String,
    pub slot: SlotId,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub confirmed_at: DateTime<Utc>,
}

impl CompletedBooking {
    pub fn new(form: BookingForm, context: BookingContext, confirmed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            teacher_name: form.teacher_name,
            subject: form.subject,
            notes: form.notes,
            slot: context.slot,
            start: context.start,
            end: context.end,
            confirmed_at,
        }
    }
}
