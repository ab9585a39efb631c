//! Status and liveness endpoints for the Prebid Server container.
//!
//! Two routes, both answering `200 application/json`:
//!
//! ```text
//! GET /        {"service":"Prebid Server","version":"1.0.0","status":"Running"}
//! GET /status  {"status":"UP","service":"prebid-server","timestamp":1700000000000}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`status`]: Response payloads
//! - [`api`]: HTTP routes, handlers and OpenAPI document
//! - [`probe`]: Liveness probe client for container health checks
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod probe;
pub mod status;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
