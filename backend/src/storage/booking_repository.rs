use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::traits::BookingRepository;
use crate::domain::models::CompletedBooking;

/// Process-lifetime booking ledger; cleared on restart
#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<Mutex<Vec<CompletedBooking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn record(&self, booking: CompletedBooking) -> Result<()> {
        let mut bookings = self
            .bookings
            .lock()
            .map_err(|_| anyhow!("booking ledger lock poisoned"))?;
        debug!("Recording booking {} ({} total)", booking.id, bookings.len() + 1);
        bookings.push(booking);
        Ok(())
    }

    fn list(&self) -> Result<Vec<CompletedBooking>> {
        let bookings = self
            .bookings
            .lock()
            .map_err(|_| anyhow!("booking ledger lock poisoned"))?;
        Ok(bookings.clone())
    }
}
