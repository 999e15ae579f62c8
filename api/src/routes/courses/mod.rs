//! # Courses Routes Module
//!
//! Defines and wires up routes for the `/api/v1/courses` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (filtered course listing, fetch one course)
//! - `put.rs` — PUT handler (edit a course; owner or admin)
//! - `delete.rs` — DELETE handler (remove a course; owner or admin)
//! - `common.rs` — shared request DTOs

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod put;

use crate::auth::guards::allow_authenticated;
use delete::delete_course;
use get::{get_course, get_courses};
use put::edit_course;

/// Builds and returns the `/courses` route group.
///
/// Routes:
/// - `GET    /courses`              → list courses (filter/sort/paginate)
/// - `GET    /courses/{course_id}`  → get a single course with its bootcamp summary
/// - `PUT    /courses/{course_id}`  → edit a course (owner or admin)
/// - `DELETE /courses/{course_id}`  → delete a course (owner or admin)
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses))
        .route("/{course_id}", get(get_course))
        .route(
            "/{course_id}",
            put(edit_course).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{course_id}",
            delete(delete_course).route_layer(from_fn(allow_authenticated)),
        )
}
