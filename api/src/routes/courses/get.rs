//! Course read handlers.
//!
//! Provides the filtered/paginated course listing and single-course fetch
//! (including a summary of the owning bootcamp).

use crate::response::{ApiResponse, Empty};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::bootcamp::Entity as BootcampEntity;
use db::models::course::{
    Column as CourseColumn, Entity as CourseEntity, Model as CourseModel,
};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;

/// Partial projection of the owning bootcamp, joined into single-course
/// responses.
#[derive(Serialize)]
pub struct BootcampSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct ShowCourseResponse {
    pub course: CourseModel,
    pub bootcamp: BootcampSummary,
}

#[derive(Debug, Deserialize)]
pub struct FilterReq {
    pub page: Option<i32>,
    pub per_page: Option<i32>,
    pub query: Option<String>,
    pub minimum_skill: Option<String>,
    pub scholarship_available: Option<String>,
    pub sort: Option<String>,
}

#[derive(Serialize)]
pub struct FilterResponse {
    pub courses: Vec<CourseModel>,
    pub page: i32,
    pub per_page: i32,
}

/// GET /api/v1/courses
///
/// Retrieves a paginated and optionally filtered list of courses across
/// all bootcamps.
///
/// # Query Parameters
///
/// Extracted via the `FilterReq` struct:
/// - `page`: (Optional) Page number for pagination. Defaults to 1. Minimum is 1.
/// - `per_page`: (Optional) Number of items per page. Defaults to 20. Maximum is 100.
/// - `query`: (Optional) General search string. Matches courses by `title` or `description`.
/// - `minimum_skill`: (Optional) Filter by skill level (`beginner`, `intermediate`, `advanced`).
/// - `scholarship_available`: (Optional) Filter by scholarship flag. Accepts `true` or `false`.
/// - `sort`: (Optional) Comma-separated list of fields to sort by.
///   Prefix with `-` for descending order (e.g., `-created_at`).
///   Allowed fields: `created_at`, `updated_at`, `title`, `tuition`, `weeks`.
///
/// # Returns
///
/// - `200 OK`: Paginated list; the envelope's `count` is the total number
///   of matching courses (across all pages).
/// - `400 BAD REQUEST`: Invalid sort field or invalid `scholarship_available` value.
/// - `500 INTERNAL SERVER ERROR`: Database query failed.
pub async fn get_courses(
    State(app_state): State<AppState>,
    Query(params): Query<FilterReq>,
) -> impl IntoResponse {
    let db = app_state.db();

    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(20).clamp(1, 100);

    if let Some(sort_field) = &params.sort {
        let valid_fields = ["created_at", "updated_at", "title", "tuition", "weeks"];
        for field in sort_field.split(',') {
            let field = field.trim().trim_start_matches('-');
            if !valid_fields.contains(&field) {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<Empty>::error("Invalid field used for sorting")),
                )
                    .into_response();
            }
        }
    }

    let mut condition = Condition::all();

    if let Some(ref query) = params.query {
        condition = condition.add(
            Condition::any()
                .add(CourseColumn::Title.contains(query))
                .add(CourseColumn::Description.contains(query)),
        );
    }

    if let Some(ref skill) = params.minimum_skill {
        condition = condition.add(CourseColumn::MinimumSkill.eq(skill.as_str()));
    }

    if let Some(ref scholarship) = params.scholarship_available {
        match scholarship.parse::<bool>() {
            Ok(flag) => {
                condition = condition.add(CourseColumn::ScholarshipAvailable.eq(flag));
            }
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<Empty>::error(
                        "Invalid scholarship_available value",
                    )),
                )
                    .into_response();
            }
        }
    }

    let mut query = CourseEntity::find().filter(condition);

    let mut applied_sort = false;

    if let Some(sort_param) = &params.sort {
        for sort in sort_param.split(',') {
            let sort = sort.trim();
            let (field, asc) = if let Some(stripped) = sort.strip_prefix('-') {
                (stripped, false)
            } else {
                (sort, true)
            };

            let column = match field {
                "created_at" => CourseColumn::CreatedAt,
                "updated_at" => CourseColumn::UpdatedAt,
                "title" => CourseColumn::Title,
                "tuition" => CourseColumn::Tuition,
                "weeks" => CourseColumn::Weeks,
                _ => continue,
            };

            applied_sort = true;
            query = if asc {
                query.order_by_asc(column)
            } else {
                query.order_by_desc(column)
            };
        }
    }

    // Default to newest first
    if !applied_sort {
        query = query.order_by_desc(CourseColumn::CreatedAt);
    }

    let paginator = query.paginate(db, per_page as u64);
    let total = match paginator.num_items().await {
        Ok(n) => n as u64,
        Err(err) => {
            tracing::error!("Error counting courses: {err:?}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Error counting courses")),
            )
                .into_response();
        }
    };

    match paginator.fetch_page((page - 1) as u64).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_count(
                FilterResponse {
                    courses,
                    page,
                    per_page,
                },
                total,
                "Courses retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Error fetching courses: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to retrieve courses")),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/courses/{course_id}
///
/// Retrieves a single course by ID, including a summary of the owning
/// bootcamp (`id`, `name`, `description` only).
///
/// # Returns
///
/// - `200 OK` with `{ course, bootcamp }` on success.
/// - `404 NOT FOUND` if the course does not exist; the message names the id.
/// - `500 INTERNAL SERVER ERROR` on database errors, including a course
///   whose parent bootcamp row is missing.
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let result = CourseEntity::find_by_id(course_id)
        .find_also_related(BootcampEntity)
        .one(db)
        .await;

    match result {
        Ok(Some((course, Some(bootcamp)))) => {
            let summary = BootcampSummary {
                id: bootcamp.id,
                name: bootcamp.name,
                description: bootcamp.description,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    ShowCourseResponse {
                        course,
                        bootcamp: summary,
                    },
                    "Course retrieved successfully",
                )),
            )
                .into_response()
        }

        Ok(Some((_course, None))) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(
                "Related bootcamp not found for course",
            )),
        )
            .into_response(),

        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error(format!(
                "No course found with id of {}",
                course_id
            ))),
        )
            .into_response(),

        Err(err) => {
            tracing::error!("Error fetching course: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to retrieve course")),
            )
                .into_response()
        }
    }
}
