//! # Storage Module
//!
//! Where schedule data comes from and where confirmed bookings go.
//!
//! ## Current Implementation
//!
//! - **Schedule sources**: an exported sheet on disk (CSV) or a spreadsheet
//!   published as CSV over HTTP. Both are read-only and optional; without
//!   one the built-in sample schedule is used.
//! - **Bookings**: an in-memory ledger. Nothing is written to disk.

pub mod booking_repository;
pub mod schedule_source;
pub mod traits;

pub use booking_repository::InMemoryBookingRepository;
pub use schedule_source::{
    build_schedule_source, fetch_entries, load_schedule, normalize_rows, read_rows,
    CsvFileSource, ImportReport, PublishedSheetSource, SheetRow,
};
pub use traits::{BookingRepository, ScheduleSource};
