use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use super::{
    dashboard_error_response, error_response,
    mappers::{BookingMapper, DashboardMapper},
    rejection_response,
};
use crate::domain::UiEvent;
use crate::AppState;
use shared::{BookingForm, BookingListResponse, ConfirmBookingResponse, SlotClickRequest};

/// Routes for the booking dialog and the booking ledger
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slots/click", post(click_slot))
        .route("/booking/form", post(edit_form))
        .route("/booking/cancel", post(cancel_booking))
        .route("/booking/confirm", post(confirm_booking))
        .route("/bookings", get(list_bookings))
}

/// Open the booking dialog on a slot
async fn click_slot(
    State(state): State<AppState>,
    payload: Result<Json<SlotClickRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("POST /api/slots/click - request: {:?}", request);

    match state.dashboard.dispatch(UiEvent::SlotClicked(request.slot_id)).await {
        Ok(reply) => (StatusCode::OK, Json(DashboardMapper::to_dto(&reply.snapshot))).into_response(),
        Err(e) => {
            error!("Failed to select slot: {}", e);
            dashboard_error_response(e)
        }
    }
}

/// Keep what the user typed so far
async fn edit_form(
    State(state): State<AppState>,
    payload: Result<Json<BookingForm>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("POST /api/booking/form");

    let form = BookingMapper::form_to_domain(request);
    match state.dashboard.dispatch(UiEvent::FormEdited(form)).await {
        Ok(reply) => (StatusCode::OK, Json(DashboardMapper::to_dto(&reply.snapshot))).into_response(),
        Err(e) => {
            error!("Failed to update booking form: {}", e);
            dashboard_error_response(e)
        }
    }
}

/// Close the dialog without booking
async fn cancel_booking(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/booking/cancel");

    match state.dashboard.dispatch(UiEvent::CancelPressed).await {
        Ok(reply) => (StatusCode::OK, Json(DashboardMapper::to_dto(&reply.snapshot))).into_response(),
        Err(e) => {
            error!("Failed to cancel booking: {}", e);
            dashboard_error_response(e)
        }
    }
}

/// Book the pending slot with the submitted fields. Without a pending slot
/// this only clears the dialog.
async fn confirm_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingForm>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("POST /api/booking/confirm - request: {:?}", request);

    let form = BookingMapper::form_to_domain(request);
    match state.dashboard.dispatch(UiEvent::ConfirmPressed(form)).await {
        Ok(reply) => {
            let response = ConfirmBookingResponse {
                dashboard: DashboardMapper::to_dto(&reply.snapshot),
                booking: reply.booking.as_ref().map(BookingMapper::to_record),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to confirm booking: {}", e);
            dashboard_error_response(e)
        }
    }
}

/// Bookings confirmed since the server started
async fn list_bookings(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/bookings");

    match state.bookings.list() {
        Ok(bookings) => {
            let response = BookingListResponse {
                bookings: BookingMapper::to_record_list(&bookings),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list bookings: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error listing bookings")
        }
    }
}
