//! Error types for the calendar domain.

/// Failures of domain operations. All of them are caused by bad input and
/// leave the dashboard state untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Week starting {0} runs past the supported calendar range")]
    DateOutOfRange(chrono::NaiveDate),
    #[error("Malformed slot id '{0}'")]
    MalformedSlotId(String),
    #[error("Slot '{0}' is not bookable in the displayed week")]
    UnknownSlot(String),
}

/// Failures seen by callers of the dashboard event loop
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Dashboard event loop is not running")]
    Unavailable,
}
