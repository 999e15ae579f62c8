//! List courses for a bootcamp.

use crate::response::{ApiResponse, Empty};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::course::Model as CourseModel;
use util::state::AppState;

/// GET /api/v1/bootcamps/{bootcamp_id}/courses
///
/// Retrieves every course whose parent is the given bootcamp. No generic
/// filtering applies here; the envelope's `count` equals the result size.
///
/// # Returns
/// - `200 OK` with the matching courses and `count`.
/// - `500 INTERNAL SERVER ERROR` on database errors.
pub async fn get_bootcamp_courses(
    State(app_state): State<AppState>,
    Path(bootcamp_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match CourseModel::find_by_bootcamp(db, bootcamp_id).await {
        Ok(courses) => {
            let count = courses.len() as u64;
            (
                StatusCode::OK,
                Json(ApiResponse::success_with_count(
                    courses,
                    count,
                    "Courses retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Error fetching courses for bootcamp {bootcamp_id}: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to retrieve courses")),
            )
                .into_response()
        }
    }
}
