//! HTTP API handlers.

use axum::Json;
use tracing::debug;

use crate::status::{HealthStatus, RootInfo};

/// Root handler - returns the service identity.
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses((status = 200, description = "Service identity", body = RootInfo))
)]
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo::current())
}

/// Liveness handler - always returns 200 with the current time.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Status",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn status() -> Json<HealthStatus> {
    let status = HealthStatus::up_now();
    debug!(timestamp = status.timestamp, "liveness check answered");
    Json(status)
}
