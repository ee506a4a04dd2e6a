//! Conversions between domain types and the `shared` wire DTOs.

pub mod booking_mapper;
pub mod dashboard_mapper;
pub mod schedule_mapper;

pub use booking_mapper::BookingMapper;
pub use dashboard_mapper::DashboardMapper;
pub use schedule_mapper::ScheduleMapper;
