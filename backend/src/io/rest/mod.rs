//! # REST API Interface Layer
//!
//! JSON endpoints the calendar page talks to. Each handler turns a request
//! into a [`UiEvent`](crate::domain::UiEvent), hands it to the dashboard
//! event loop and answers with a fresh [`shared::DashboardResponse`].
//!
//! ## Error Translation
//!
//! - Bad dates and unknown slot ids → `400 Bad Request`
//! - Event loop not running → `500 Internal Server Error`
//! - Undecodable JSON bodies → the extractor's 4xx status with the same
//!   `{error}` body; they never reach the dashboard, so state never changes

pub mod booking_apis;
pub mod dashboard_apis;
pub mod mappers;
pub mod schedule_apis;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use shared::ErrorResponse;
use tracing::warn;

use crate::domain::DashboardError;
use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(dashboard_apis::router())
        .merge(booking_apis::router())
        .merge(schedule_apis::router())
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub(crate) fn dashboard_error_response(e: DashboardError) -> Response {
    let status = match e {
        DashboardError::Domain(_) => StatusCode::BAD_REQUEST,
        DashboardError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, e.to_string())
}

pub(crate) fn rejection_response(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    error_response(rejection.status(), rejection.body_text())
}
