//! Edit course handler.
//!
//! **Permissions:** Only the course's creating user or an admin may edit it.

use crate::{
    auth::{AuthUser, can_modify},
    response::{ApiResponse, Empty},
    routes::common::format_validation_errors,
    routes::courses::common::UpdateCourseRequest,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::course::{ActiveModel as CourseActiveModel, Model as CourseModel};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};
use util::state::AppState;
use validator::Validate;

/// PUT /api/v1/courses/{course_id}
///
/// Applies a partial update to an existing course. Fields absent from the
/// body keep their current values; `bootcamp_id` and `user_id` are not
/// part of the payload and cannot change.
///
/// The ownership check runs against the course as it exists before the
/// update. Ownership fields are immutable through this API, so the check
/// cannot be invalidated between read and write.
///
/// # Responses
/// - `200 OK` — Returns the updated course.
/// - `400 BAD REQUEST` — Validation failure on the request body.
/// - `401 UNAUTHORIZED` — Missing/invalid token, or caller is neither the
///   course creator nor an admin.
/// - `404 NOT FOUND` — No course with the given ID.
/// - `500 INTERNAL SERVER ERROR` — Database error.
pub async fn edit_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateCourseRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(format_validation_errors(
                &errors,
            ))),
        )
            .into_response();
    }

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
                "User {} is not authorized to update course {}",
                claims.sub, course.id
            ))),
        )
            .into_response();
    }

    let mut active: CourseActiveModel = course.into_active_model();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(weeks) = req.weeks {
        active.weeks = Set(weeks);
    }
    if let Some(tuition) = req.tuition {
        active.tuition = Set(tuition);
    }
    if let Some(minimum_skill) = req.minimum_skill {
        active.minimum_skill = Set(minimum_skill);
    }
    if let Some(scholarship_available) = req.scholarship_available {
        active.scholarship_available = Set(scholarship_available);
    }
    active.updated_at = Set(Utc::now());

    match active.update(db).await {
        Ok(updated_course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                updated_course,
                "Course updated successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Error updating course {course_id}: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update course")),
            )
                .into_response()
        }
    }
}
