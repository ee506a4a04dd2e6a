//! # Library Calendar Backend
//!
//! Server for the school library booking calendar: a Monday-to-Friday grid
//! of class periods where teachers pick a half or a whole period and book
//! the library for it.
//!
//! ## Architecture
//!
//! ```text
//! Browser (static/index.html)
//!     ↓
//! IO Layer (REST API, embedded page)
//!     ↓
//! Domain Layer (week resolver, grid renderer, booking session, event loop)
//!     ↓
//! Storage Layer (schedule sheet import, booking ledger)
//! ```
//!
//! [`initialize_backend`] builds the state and starts the dashboard event
//! loop; [`create_router`] wires the HTTP surface on top of it.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{event_loop, Dashboard, DashboardHandle, PeriodTable, ScheduleStore};
use crate::storage::{
    build_schedule_source, load_schedule, BookingRepository, InMemoryBookingRepository, ScheduleSource,
};

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardHandle,
    pub bookings: Arc<dyn BookingRepository>,
    /// Sheet to re-read on `POST /api/schedule/reload`
    pub schedule_source: Option<Arc<dyn ScheduleSource>>,
}

/// Load the schedule, build the dashboard and start its event loop
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up schedule");
    let mut store = ScheduleStore::sample();
    let schedule_source = build_schedule_source(&config.schedule_source);
    match &schedule_source {
        Some(source) => {
            load_schedule(source.as_ref(), &mut store).await;
        }
        None => info!("No schedule source configured, using sample schedule"),
    }

    info!("Setting up dashboard");
    let start = config.start_week();
    let dashboard = Dashboard::new(store, PeriodTable::regular(), PeriodTable::early_out(), start)
        .with_context(|| format!("cannot show the week starting {}", start))?;

    let bookings: Arc<dyn BookingRepository> = Arc::new(InMemoryBookingRepository::new());
    let handle = event_loop::spawn(dashboard, bookings.clone());

    info!("Setting up application state");
    Ok(AppState {
        dashboard: handle,
        bookings,
        schedule_source,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let mut router = Router::new()
        .route("/", get(io::ui::index))
        .nest("/api", io::rest::router());

    if let Some(origin) = cors_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("invalid CORS origin {}", origin))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
        router = router.layer(cors);
    }

    Ok(router.with_state(app_state))
}
