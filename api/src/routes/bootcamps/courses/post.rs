//! Create course handler.
//!
//! **Permissions:** Only the bootcamp's owner or an admin may add a course
//! to a bootcamp.

use crate::{
    auth::{AuthUser, can_modify},
    response::{ApiResponse, Empty},
    routes::bootcamps::courses::common::CreateCourseRequest,
    routes::common::format_validation_errors,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::bootcamp::Model as BootcampModel;
use db::models::course::Model as CourseModel;
use util::state::AppState;
use validator::Validate;

/// POST /api/v1/bootcamps/{bootcamp_id}/courses
///
/// Creates a course under the given bootcamp. The course's `bootcamp_id`
/// comes from the path and its `user_id` from the authenticated caller;
/// the request body cannot override either.
///
/// # Request Body
/// JSON matching `CreateCourseRequest`:
/// ```json
/// {
///   "title": "Full Stack Web Development",
///   "description": "In this course you will learn HTML, CSS, JavaScript...",
///   "weeks": 12,
///   "tuition": 10000,
///   "minimum_skill": "intermediate",
///   "scholarship_available": true
/// }
/// ```
///
/// # Responses
/// - `201 CREATED` — Returns the persisted course.
/// - `400 BAD REQUEST` — Validation failure on the request body.
/// - `401 UNAUTHORIZED` — Missing/invalid token, or caller is neither the
///   bootcamp owner nor an admin.
/// - `404 NOT FOUND` — No bootcamp with the given ID.
/// - `500 INTERNAL SERVER ERROR` — Database error.
pub async fn create_course(
    State(app_state): State<AppState>,
    Path(bootcamp_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateCourseRequest>,
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

    let bootcamp = match BootcampModel::get_by_id(db, bootcamp_id).await {
        Ok(Some(bootcamp)) => bootcamp,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error(format!(
                    "No bootcamp with id of {}",
                    bootcamp_id
                ))),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("Error fetching bootcamp {bootcamp_id}: {err:?}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to retrieve bootcamp")),
            )
                .into_response();
        }
    };

    // Make sure the caller owns the bootcamp
    if !can_modify(&claims, bootcamp.user_id) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<Empty>::error(format!(
                "User {} is not authorized to add a course to bootcamp {}",
                claims.sub, bootcamp.id
            ))),
        )
            .into_response();
    }

    match CourseModel::create(
        db,
        bootcamp_id,
        claims.sub,
        &req.title,
        &req.description,
        req.weeks,
        req.tuition,
        &req.minimum_skill,
        req.scholarship_available,
    )
    .await
    {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(course, "Course created successfully")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Error creating course: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to create course")),
            )
                .into_response()
        }
    }
}
