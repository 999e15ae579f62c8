use axum::{Router, body::Body, http::Request, response::Response};
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::{config::AppConfig, state::AppState};

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

/// Builds a fresh application instance backed by its own in-memory
/// database, so tests cannot interfere with each other.
pub async fn make_test_app() -> (TestApp, AppState) {
    AppConfig::set_jwt_secret("test-secret");
    AppConfig::set_jwt_duration_minutes(60);

    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db);

    let router = Router::new().nest("/api/v1", api::routes::routes(app_state.clone()));
    (router.boxed_clone(), app_state)
}
