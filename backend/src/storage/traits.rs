//! # Storage Traits
//!
//! Abstractions the rest of the backend depends on, so sources and ledgers
//! can be swapped without touching the domain or REST layers.

use anyhow::Result;
use async_trait::async_trait;

use super::schedule_source::SheetRow;
use crate::domain::models::CompletedBooking;

/// Read-only tabular schedule data (Date, Day Type, Notes)
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch every row. Rows are returned raw; date normalization happens
    /// in [`super::normalize_rows`].
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>>;

    /// Human-readable location for log lines
    fn describe(&self) -> String;
}

/// Record of confirmed bookings
pub trait BookingRepository: Send + Sync {
    fn record(&self, booking: CompletedBooking) -> Result<()>;

    /// Bookings in confirmation order
    fn list(&self) -> Result<Vec<CompletedBooking>>;
}
