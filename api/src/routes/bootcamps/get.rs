//! Bootcamp read handlers.
//!
//! Public endpoints: anyone may list bootcamps or fetch one by ID.

use crate::response::{ApiResponse, Empty};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::bootcamp::Model as BootcampModel;
use util::state::AppState;

/// GET /api/v1/bootcamps
///
/// Retrieves every bootcamp. The response envelope carries `count`.
pub async fn get_bootcamps(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match BootcampModel::get_all(db).await {
        Ok(bootcamps) => {
            let count = bootcamps.len() as u64;
            (
                StatusCode::OK,
                Json(ApiResponse::success_with_count(
                    bootcamps,
                    count,
                    "Bootcamps retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Error fetching bootcamps: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to retrieve bootcamps")),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/bootcamps/{bootcamp_id}
///
/// Retrieves a single bootcamp by ID.
///
/// # Returns
/// - `200 OK` with the bootcamp.
/// - `404 NOT FOUND` if no bootcamp with that ID exists.
/// - `500 INTERNAL SERVER ERROR` on database errors.
pub async fn get_bootcamp(
    State(app_state): State<AppState>,
    Path(bootcamp_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match BootcampModel::get_by_id(db, bootcamp_id).await {
        Ok(Some(bootcamp)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                bootcamp,
                "Bootcamp retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error(format!(
                "No bootcamp with id of {}",
                bootcamp_id
            ))),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Error fetching bootcamp: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to retrieve bootcamp")),
            )
                .into_response()
        }
    }
}
