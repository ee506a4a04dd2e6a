//! Core value types of the library calendar.

pub mod booking;
pub mod period;
pub mod schedule;
pub mod slot;

pub use booking::*;
pub use period::*;
pub use schedule::*;
pub use slot::*;
