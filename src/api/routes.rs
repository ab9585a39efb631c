//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{root, status};
use super::openapi::openapi_json;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/status", get(status))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
}
