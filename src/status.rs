//! Response payloads for the status endpoints.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Display name reported by `GET /`.
pub const SERVICE_NAME: &str = "Prebid Server";
/// Service identifier reported by `GET /status`.
pub const SERVICE_ID: &str = "prebid-server";
/// Release version, taken from the package metadata.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Lifecycle state reported by `GET /`.
pub const STATUS_RUNNING: &str = "Running";
/// Liveness state reported by `GET /status`.
pub const STATUS_UP: &str = "UP";

/// Service identity returned from the root path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RootInfo {
    /// Human-readable service name.
    #[schema(example = "Prebid Server")]
    pub service: String,
    /// Release version.
    #[schema(example = "1.0.0")]
    pub version: String,
    /// Lifecycle state.
    #[schema(example = "Running")]
    pub status: String,
}

impl RootInfo {
    /// Identity of this service.
    pub fn current() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            status: STATUS_RUNNING.to_string(),
        }
    }
}

/// Liveness payload returned from `/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Liveness state.
    #[schema(example = "UP")]
    pub status: String,
    /// Service identifier.
    #[schema(example = "prebid-server")]
    pub service: String,
    /// Milliseconds since the Unix epoch at the time the request was handled.
    #[schema(example = 1_700_000_000_000_i64)]
    pub timestamp: i64,
}

impl HealthStatus {
    /// Liveness payload stamped with the current wall-clock time.
    pub fn up_now() -> Self {
        Self::up_at(OffsetDateTime::now_utc())
    }

    /// Liveness payload stamped with `at`.
    pub fn up_at(at: OffsetDateTime) -> Self {
        Self {
            status: STATUS_UP.to_string(),
            service: SERVICE_ID.to_string(),
            timestamp: epoch_millis(at),
        }
    }

    /// Whether the payload reports the service as up.
    pub fn is_up(&self) -> bool {
        self.status == STATUS_UP
    }
}

/// Milliseconds between the Unix epoch and `at`, floored.
pub fn epoch_millis(at: OffsetDateTime) -> i64 {
    at.unix_timestamp() * 1000 + i64::from(at.millisecond())
}
