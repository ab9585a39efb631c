//! Client for checking a running instance's liveness endpoint.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::{Result, ServiceError};
use crate::status::HealthStatus;

/// Default request timeout for a probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness probe against a `/status` URL.
#[derive(Debug, Clone)]
pub struct StatusProbe {
    /// HTTP client for probe requests.
    http: reqwest::Client,
    /// Full URL of the liveness endpoint.
    url: String,
}

impl StatusProbe {
    /// Create a probe for `url` whose requests give up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// URL this probe targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the liveness payload and confirm the service reports itself up.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn check(&self) -> Result<HealthStatus> {
        let response = self.http.get(&self.url).send().await?;

        let code = response.status();
        if !code.is_success() {
            return Err(ServiceError::UnexpectedStatus {
                url: self.url.clone(),
                status: code.as_u16(),
            });
        }

        let status: HealthStatus = response.json().await?;
        debug!(status = %status.status, timestamp = status.timestamp, "probe response");

        if !status.is_up() {
            return Err(ServiceError::NotUp {
                status: status.status,
            });
        }

        Ok(status)
    }
}
