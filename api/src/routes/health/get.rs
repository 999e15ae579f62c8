use crate::response::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// GET /api/v1/health
///
/// Liveness probe. Always returns `200 OK` while the process is serving.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            HealthStatus { status: "ok" },
            "Service is healthy",
        )),
    )
}
