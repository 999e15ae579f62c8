//! # Bootcamps Routes Module
//!
//! Defines and wires up routes for the `/api/v1/bootcamps` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list bootcamps, fetch one bootcamp)
//! - `courses/` — nested course routes under a bootcamp

use axum::{
    Router,
    routing::get,
};
use get::{get_bootcamp, get_bootcamps};
use util::state::AppState;

use crate::routes::bootcamps::courses::bootcamp_course_routes;

pub mod courses;
pub mod get;

/// Builds and returns the `/bootcamps` route group.
///
/// Routes:
/// - `GET /bootcamps`                → list all bootcamps
/// - `GET /bootcamps/{bootcamp_id}`  → get a single bootcamp by ID
///
/// Nested course routes live under `/bootcamps/{bootcamp_id}/courses`.
pub fn bootcamp_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_bootcamps))
        .route("/{bootcamp_id}", get(get_bootcamp))
        .nest("/{bootcamp_id}/courses", bootcamp_course_routes())
}
