use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use super::{dashboard_error_response, mappers::DashboardMapper, rejection_response};
use crate::domain::UiEvent;
use crate::AppState;
use shared::SelectWeekRequest;

/// Routes for viewing and moving between weeks
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/week", post(select_week))
        .route("/week/previous", post(previous_week))
        .route("/week/next", post(next_week))
}

/// Current week, grid and booking dialog state
async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");

    match state.dashboard.snapshot().await {
        Ok(snapshot) => (StatusCode::OK, Json(DashboardMapper::to_dto(&snapshot))).into_response(),
        Err(e) => {
            error!("Failed to read dashboard: {}", e);
            dashboard_error_response(e)
        }
    }
}

/// Show the five days starting at the picked date
async fn select_week(
    State(state): State<AppState>,
    payload: Result<Json<SelectWeekRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("POST /api/week - request: {:?}", request);
    apply(&state, UiEvent::DateChanged(request.date)).await
}

async fn previous_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/week/previous");
    apply(&state, UiEvent::PreviousWeek).await
}

async fn next_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/week/next");
    apply(&state, UiEvent::NextWeek).await
}

async fn apply(state: &AppState, event: UiEvent) -> axum::response::Response {
    match state.dashboard.dispatch(event).await {
        Ok(reply) => (StatusCode::OK, Json(DashboardMapper::to_dto(&reply.snapshot))).into_response(),
        Err(e) => {
            error!("Failed to change week: {}", e);
            dashboard_error_response(e)
        }
    }
}
