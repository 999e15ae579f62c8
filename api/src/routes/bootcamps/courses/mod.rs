use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use crate::auth::guards::allow_authenticated;
use get::get_bootcamp_courses;
use post::create_course;

/// Builds the `/bootcamps/{bootcamp_id}/courses` route group.
///
/// - `GET  /` → list courses for the bootcamp (public)
/// - `POST /` → create a course under the bootcamp (authenticated;
///   bootcamp owner or admin)
pub fn bootcamp_course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_bootcamp_courses))
        .route(
            "/",
            post(create_course).route_layer(from_fn(allow_authenticated)),
        )
}
