//! Single-threaded event loop that owns the [`Dashboard`].
//!
//! HTTP handlers never touch the dashboard directly. They send requests
//! through a cloneable [`DashboardHandle`]; one Tokio task receives them in
//! order, so exactly one event is applied at a time and a later event simply
//! overwrites what an earlier one left pending.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, warn};

use super::error::{DashboardError, DomainError};
use super::events::{dispatch, Dashboard, DashboardSnapshot, SideEffect, UiEvent};
use super::models::{CompletedBooking, ScheduleEntry};
use crate::storage::BookingRepository;

const REQUEST_QUEUE_DEPTH: usize = 64;

/// Result of a dispatched event
#[derive(Debug, Clone)]
pub struct EventReply {
    pub snapshot: DashboardSnapshot,
    /// Booking completed by this event, if any
    pub booking: Option<CompletedBooking>,
}

enum Request {
    Dispatch {
        event: UiEvent,
        reply: oneshot::Sender<Result<EventReply, DomainError>>,
    },
    Snapshot {
        reply: oneshot::Sender<DashboardSnapshot>,
    },
    Schedule {
        reply: oneshot::Sender<Vec<ScheduleEntry>>,
    },
}

/// Cheap handle for talking to the event loop
#[derive(Clone)]
pub struct DashboardHandle {
    sender: mpsc::Sender<Request>,
}

impl DashboardHandle {
    /// Apply an event and return the resulting dashboard
    pub async fn dispatch(&self, event: UiEvent) -> Result<EventReply, DashboardError> {
        let (reply, response) = oneshot::channel();
        self.send(Request::Dispatch { event, reply }).await?;
        let result = response.await.map_err(|_| DashboardError::Unavailable)?;
        Ok(result?)
    }

    pub async fn snapshot(&self) -> Result<DashboardSnapshot, DashboardError> {
        let (reply, response) = oneshot::channel();
        self.send(Request::Snapshot { reply }).await?;
        response.await.map_err(|_| DashboardError::Unavailable)
    }

    /// All known schedule entries in date order
    pub async fn schedule(&self) -> Result<Vec<ScheduleEntry>, DashboardError> {
        let (reply, response) = oneshot::channel();
        self.send(Request::Schedule { reply }).await?;
        response.await.map_err(|_| DashboardError::Unavailable)
    }

    async fn send(&self, request: Request) -> Result<(), DashboardError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| DashboardError::Unavailable)
    }
}

/// Spawn the loop on the current runtime. It runs until every handle is
/// dropped.
pub fn spawn(dashboard: Dashboard, bookings: Arc<dyn BookingRepository>) -> DashboardHandle {
    let (sender, receiver) = mpsc::channel(REQUEST_QUEUE_DEPTH);
    tokio::spawn(run(dashboard, bookings, receiver));
    DashboardHandle { sender }
}

async fn run(
    mut dashboard: Dashboard,
    bookings: Arc<dyn BookingRepository>,
    mut receiver: mpsc::Receiver<Request>,
) {
    info!("🔁 Dashboard event loop started");

    while let Some(request) = receiver.recv().await {
        match request {
            Request::Dispatch { event, reply } => {
                let name = event.name();
                let result = dispatch(&mut dashboard, event).map(|effects| {
                    let booking = perform(effects, bookings.as_ref());
                    EventReply {
                        snapshot: dashboard.snapshot(),
                        booking,
                    }
                });
                if let Err(e) = &result {
                    warn!("Rejected {} event: {}", name, e);
                }
                if reply.send(result).is_err() {
                    warn!("Caller went away before {} completed", name);
                }
            }
            Request::Snapshot { reply } => {
                let _ = reply.send(dashboard.snapshot());
            }
            Request::Schedule { reply } => {
                let _ = reply.send(dashboard.store().entries().cloned().collect());
            }
        }
    }

    info!("Dashboard event loop stopped");
}

/// Carry out side effects; returns the booking they completed, if any
fn perform(effects: Vec<SideEffect>, bookings: &dyn BookingRepository) -> Option<CompletedBooking> {
    let mut completed = None;
    for effect in effects {
        match effect {
            SideEffect::BookingCompleted(booking) => {
                info!(
                    "✅ Booking confirmed: {} - {} - {} ({} - {}) notes: {:?}",
                    booking.teacher_name,
                    booking.subject,
                    booking.slot,
                    booking.start,
                    booking.end,
                    booking.notes
                );
                if let Err(e) = bookings.record(booking.clone()) {
                    error!("Failed to record booking {}: {}", booking.id, e);
                }
                completed = Some(booking);
            }
        }
    }
    completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BookingForm, PeriodTable};
    use crate::domain::schedule_store::ScheduleStore;
    use crate::storage::InMemoryBookingRepository;
    use chrono::NaiveDate;

    fn start() -> (DashboardHandle, Arc<InMemoryBookingRepository>) {
        let dashboard = Dashboard::new(
            ScheduleStore::sample(),
            PeriodTable::regular(),
            PeriodTable::early_out(),
            NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(),
        )
        .unwrap();
        let bookings = Arc::new(InMemoryBookingRepository::new());
        (spawn(dashboard, bookings.clone()), bookings)
    }

    #[tokio::test]
    async fn test_booking_flow_records_ledger_entry() -> Result<(), Box<dyn std::error::Error>> {
        let (handle, bookings) = start();

        let reply = handle
            .dispatch(UiEvent::SlotClicked("Thursday|A4/B8|entire".into()))
            .await?;
        assert!(reply.snapshot.session.is_modal_open());
        assert!(reply.booking.is_none());

        let form = BookingForm {
            teacher_name: "Mr. Okafor".into(),
            subject: "World History".into(),
            notes: String::new(),
        };
        let reply = handle.dispatch(UiEvent::ConfirmPressed(form)).await?;
        let booking = reply.booking.expect("booking completed");
        assert_eq!(booking.start.to_string(), "13:30");
        assert_eq!(booking.end.to_string(), "14:45");
        assert!(!reply.snapshot.session.is_modal_open());

        let recorded = bookings.list()?;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].id, booking.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_event_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let (handle, bookings) = start();

        let result = handle.dispatch(UiEvent::DateChanged("not-a-date".into())).await;
        assert!(matches!(
            result,
            Err(DashboardError::Domain(DomainError::InvalidDate(_)))
        ));

        // loop is still alive afterwards
        let snapshot = handle.snapshot().await?;
        assert_eq!(snapshot.selected_date, NaiveDate::from_ymd_opt(2025, 8, 18).unwrap());
        assert!(bookings.list()?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_events_apply_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let (handle, _) = start();

        let mut tasks = Vec::new();
        for _ in 0..4 {
            let handle = handle.clone();
            tasks.push(tokio::spawn(async move { handle.dispatch(UiEvent::NextWeek).await }));
        }
        for task in tasks {
            task.await??;
        }

        let snapshot = handle.snapshot().await?;
        assert_eq!(snapshot.selected_date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
        assert_eq!(handle.schedule().await?.len(), 17);
        Ok(())
    }

    #[tokio::test]
    async fn test_loop_survives_out_of_range_week() -> Result<(), Box<dyn std::error::Error>> {
        let (handle, _) = start();

        let last = NaiveDate::MAX.format("%Y-%m-%d").to_string();
        let result = handle.dispatch(UiEvent::DateChanged(last)).await;
        assert!(matches!(
            result,
            Err(DashboardError::Domain(DomainError::DateOutOfRange(_)))
        ));

        let snapshot = handle.snapshot().await?;
        assert_eq!(snapshot.selected_date, NaiveDate::from_ymd_opt(2025, 8, 18).unwrap());
        handle.dispatch(UiEvent::NextWeek).await?;
        Ok(())
    }
}
