//! # IO Module
//!
//! Interface layer between the browser and the dashboard.
//!
//! - **REST**: JSON endpoints under `/api` that turn requests into dashboard
//!   events and answer with a fresh snapshot
//! - **UI**: the calendar page itself, embedded in the binary and served at `/`
//!
//! Handlers never touch the dashboard directly. Everything goes through the
//! [`DashboardHandle`](crate::domain::DashboardHandle) in [`AppState`](crate::AppState),
//! so events are applied one at a time in arrival order.

pub mod rest;
pub mod ui;
