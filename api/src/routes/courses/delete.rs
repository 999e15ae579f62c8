//! Delete course handler.
//!
//! **Permissions:** Only the course's creating user or an admin may delete it.

use crate::{
    auth::{AuthUser, can_modify},
    response::{ApiResponse, Empty},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::course::Model as CourseModel;
use util::state::AppState;

/// DELETE /api/v1/courses/{course_id}
///
/// Hard-deletes a course. There is no soft-delete or tombstone; a
/// subsequent fetch of the same ID returns 404.
///
/// # Responses
/// - `200 OK` — `{ "success": true, "data": {}, ... }`.
/// - `401 UNAUTHORIZED` — Missing/invalid token, or caller is neither the
///   course creator nor an admin.
/// - `404 NOT FOUND` — No course with the given ID.
/// - `500 INTERNAL SERVER ERROR` — Database error.
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = app_state.db();

    let course = match CourseModel::get_by_id(db, course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error(format!(
                    "No course found with id of {}",
                    course_id
                ))),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("Error fetching course {course_id}: {err:?}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to retrieve course")),
            )
                .into_response();
        }
    };

    // Make sure the caller owns the course
    if !can_modify(&claims, course.user_id) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<Empty>::error(format!(
                "User {} is not authorized to delete course {}",
                claims.sub, course.id
            ))),
        )
            .into_response();
    }

    match CourseModel::delete(db, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty {},
                "Course deleted successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Error deleting course {course_id}: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to delete course")),
            )
                .into_response()
        }
    }
}
