//! OpenAPI document for the status endpoints.

use axum::Json;
use utoipa::OpenApi;

use crate::status::{HealthStatus, RootInfo};

/// OpenAPI description of the HTTP surface.
///
/// Title and version come from the package metadata.
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::handlers::root, crate::api::handlers::status),
    components(schemas(RootInfo, HealthStatus)),
    tags((name = "Status", description = "Service identity and liveness"))
)]
pub struct ApiDoc;

/// Serve the generated document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
