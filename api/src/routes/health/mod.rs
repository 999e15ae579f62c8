pub mod get;

use axum::{Router, routing::get};
use get::health_check;
use util::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
