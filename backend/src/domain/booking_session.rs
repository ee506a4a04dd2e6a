//! Transient state of the booking dialog.
//!
//! ```text
//!            slot clicked                 form edited
//!   Idle ─────────────────▶ SlotSelected ─────────────▶ FormEditing
//!    ▲                          │                            │
//!    └──── cancel / confirm ────┴────────────────────────────┘
//! ```
//!
//! A later click overwrites the pending slot of an earlier one. Nothing here
//! is persisted; a confirmed booking is handed back to the caller.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::models::{BookingContext, BookingForm, CompletedBooking};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Dialog closed, no pending slot
    Idle,
    /// Dialog open on a slot, fields empty
    SlotSelected,
    /// Dialog open and the user has typed into it
    FormEditing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    state: SessionState,
    pending: Option<BookingContext>,
    form: BookingForm,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            pending: None,
            form: BookingForm::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_modal_open(&self) -> bool {
        self.state != SessionState::Idle
    }

    pub fn pending(&self) -> Option<&BookingContext> {
        self.pending.as_ref()
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Open the dialog on `context` with empty fields
    pub fn select_slot(&mut self, context: BookingContext) {
        debug!("Booking dialog opened for {}", context.slot);
        self.pending = Some(context);
        self.form = BookingForm::default();
        self.state = SessionState::SlotSelected;
    }

    /// Record typed field values. Ignored while the dialog is closed;
    /// returns whether the values were kept.
    pub fn edit_form(&mut self, form: BookingForm) -> bool {
        if !self.is_modal_open() {
            debug!("Ignoring form edit while the booking dialog is closed");
            return false;
        }
        self.form = form;
        self.state = SessionState::FormEditing;
        true
    }

    /// Close the dialog and drop the pending slot
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    /// Close the dialog. With a pending slot, returns the completed booking
    /// built from `form`; without one this only clears the fields.
    pub fn confirm(&mut self, form: BookingForm, now: DateTime<Utc>) -> Option<CompletedBooking> {
        let pending = self.pending.take();
        *self = Self::new();
        pending.map(|context| CompletedBooking::new(form, context, now))
    }
}
