use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use super::{dashboard_error_response, error_response, mappers::ScheduleMapper};
use crate::domain::UiEvent;
use crate::storage::fetch_entries;
use crate::AppState;
use shared::{ReloadScheduleResponse, ScheduleListResponse};

/// Routes for reading and refreshing the day-type schedule
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedule", get(list_schedule))
        .route("/schedule/reload", post(reload_schedule))
}

async fn list_schedule(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/schedule");

    match state.dashboard.schedule().await {
        Ok(entries) => {
            let response = ScheduleListResponse {
                entries: ScheduleMapper::to_dto_list(&entries),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to read schedule: {}", e);
            dashboard_error_response(e)
        }
    }
}

/// Re-read the configured sheet and merge it into the schedule. A failed
/// read leaves the schedule untouched.
async fn reload_schedule(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/schedule/reload");

    let Some(source) = state.schedule_source.as_ref() else {
        return error_response(StatusCode::BAD_REQUEST, "No schedule source configured");
    };

    let report = match fetch_entries(source.as_ref()).await {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to reload schedule: {:#}", e);
            return error_response(
                StatusCode::BAD_GATEWAY,
                format!("Could not read schedule from {}", source.describe()),
            );
        }
    };

    let loaded = report.entries.len();
    let skipped = report.skipped;
    if let Err(e) = state
        .dashboard
        .dispatch(UiEvent::ScheduleReloaded(report.entries))
        .await
    {
        error!("Failed to apply reloaded schedule: {}", e);
        return dashboard_error_response(e);
    }

    let total = match state.dashboard.schedule().await {
        Ok(entries) => entries.len(),
        Err(e) => {
            error!("Failed to read schedule: {}", e);
            return dashboard_error_response(e);
        }
    };

    info!("📋 Reloaded {} dates ({} skipped, {} known)", loaded, skipped, total);
    let response = ReloadScheduleResponse {
        loaded,
        skipped,
        total,
        success_message: format!("Loaded {} dates from {}", loaded, source.describe()),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, ScheduleSourceConfig};
    use crate::{create_router, initialize_backend};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use shared::{DashboardResponse, ReloadScheduleResponse, ScheduleListResponse};
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tower::ServiceExt;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn request(method: Method, uri: &str) -> Result<Request<Body>, axum::http::Error> {
        Request::builder().uri(uri).method(method).body(Body::empty())
    }

    #[tokio::test]
    async fn test_list_sample_schedule() -> TestResult {
        let app_state = initialize_backend(&AppConfig::default()).await?;
        let app = create_router(app_state, None)?;

        let response = app.oneshot(request(Method::GET, "/api/schedule")?).await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let list: ScheduleListResponse = serde_json::from_slice(&body)?;

        assert_eq!(list.entries.len(), 17);
        assert_eq!(list.entries[0].date, "2025-08-14");
        assert_eq!(list.entries[0].notes, "First Day of School");
        Ok(())
    }

    #[tokio::test]
    async fn test_reload_without_source() -> TestResult {
        let app_state = initialize_backend(&AppConfig::default()).await?;
        let app = create_router(app_state, None)?;

        let response = app.oneshot(request(Method::POST, "/api/schedule/reload")?).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_reload_from_csv_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Date,Day Type,Notes")?;
        writeln!(file, "08/18/2025,B Day,Assembly")?;
        file.flush()?;

        let config = AppConfig {
            schedule_source: ScheduleSourceConfig::Csv {
                path: file.path().to_path_buf(),
            },
            ..AppConfig::default()
        };
        let app_state = initialize_backend(&config).await?;
        let app = create_router(app_state, None)?;

        // The sheet changes after startup; reload picks up the new rows
        writeln!(file, "09/15/2025,A Day,")?;
        writeln!(file, "not a date,B Day,")?;
        file.flush()?;

        let response = app
            .clone()
            .oneshot(request(Method::POST, "/api/schedule/reload")?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let report: ReloadScheduleResponse = serde_json::from_slice(&body)?;
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.total, 18);

        let response = app.oneshot(request(Method::GET, "/api/dashboard")?).await?;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let dashboard: DashboardResponse = serde_json::from_slice(&body)?;
        assert_eq!(dashboard.week.days[0].day_type, "B Day");
        assert_eq!(dashboard.week.days[0].notes, "Assembly");
        Ok(())
    }

    #[tokio::test]
    async fn test_reload_missing_file_keeps_schedule() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = AppConfig {
            schedule_source: ScheduleSourceConfig::Csv {
                path: dir.path().join("missing.csv"),
            },
            ..AppConfig::default()
        };
        let app_state = initialize_backend(&config).await?;
        let app = create_router(app_state, None)?;

        let response = app
            .clone()
            .oneshot(request(Method::POST, "/api/schedule/reload")?)
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = app.oneshot(request(Method::GET, "/api/schedule")?).await?;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let list: ScheduleListResponse = serde_json::from_slice(&body)?;
        assert_eq!(list.entries.len(), 17);
        Ok(())
    }
}
