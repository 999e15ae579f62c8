//! HTTP route entry point for `/api/v1/...`.
//!
//! Routes are organized by resource, each protected via the appropriate
//! access control middleware:
//! - `/health` → Health check endpoint (public)
//! - `/bootcamps` → Bootcamp listing and nested course routes
//! - `/courses` → Course listing, fetch, update, delete

use crate::routes::{bootcamps::bootcamp_routes, courses::course_routes, health::health_routes};
use axum::Router;
use util::state::AppState;

pub mod bootcamps;
pub mod common;
pub mod courses;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type and mounts all
/// core API routes under their respective base paths. Read endpoints are
/// public; mutating endpoints are gated by `allow_authenticated` inside
/// the individual route groups.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/bootcamps", bootcamp_routes())
        .nest("/courses", course_routes())
        .with_state(app_state)
}
