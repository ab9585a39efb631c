//! Unified error types for the status service.

use thiserror::Error;

/// Unified error type for the status service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (bind, accept, serve).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The probed endpoint answered with a non-success status code.
    #[error("unexpected response from {url}: HTTP {status}")]
    UnexpectedStatus {
        /// URL that was probed.
        url: String,
        /// Status code received.
        status: u16,
    },

    /// The probed endpoint answered but did not report itself as up.
    #[error("service reported status {status:?}, expected \"UP\"")]
    NotUp {
        /// Status string reported by the service.
        status: String,
    },
}

/// Result type alias using [`ServiceError`].
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_errors_render_context() {
        let err = ServiceError::UnexpectedStatus {
            url: "http://127.0.0.1:8080/status".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "unexpected response from http://127.0.0.1:8080/status: HTTP 503"
        );

        let err = ServiceError::NotUp {
            status: "DOWN".to_string(),
        };
        assert_eq!(err.to_string(), "service reported status \"DOWN\", expected \"UP\"");
    }
}
