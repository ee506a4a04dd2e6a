//! # Domain Module
//!
//! All scheduling and booking rules of the library calendar. Nothing in
//! here knows about HTTP or where the schedule came from.
//!
//! ## Module Organization
//!
//! - **models**: day types, schedule entries, periods, slot ids, bookings
//! - **schedule_store**: date -> day type map, seeded with the sample table
//! - **week_resolver**: the five-day window shown for a selected date
//! - **grid_renderer**: periods x weekdays grid with bookable half slots
//! - **booking_session**: state of the booking dialog
//! - **events**: UI events and the dispatch table applying them
//! - **event_loop**: the task that owns the dashboard and serializes events
//!
//! ## Business Rules
//!
//! - A selected date is the first day of the window; it is never snapped
//! - Days without a schedule entry are "No School"
//! - Wednesdays whose notes contain "Early Out" use the early-out timetable
//! - A period split point is the truncated midpoint in whole minutes
//! - Confirming without a selected slot only clears the dialog

pub mod booking_session;
pub mod error;
pub mod event_loop;
pub mod events;
pub mod grid_renderer;
pub mod models;
pub mod schedule_store;
pub mod week_resolver;

pub use booking_session::*;
pub use error::*;
pub use event_loop::{DashboardHandle, EventReply};
pub use events::*;
pub use grid_renderer::*;
pub use models::*;
pub use schedule_store::*;
pub use week_resolver::*;
