//! HTTP API module for the root identity and liveness endpoints.

pub mod handlers;
pub mod openapi;
pub mod routes;

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;

pub use openapi::ApiDoc;
pub use routes::create_router;

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server shut down");
    Ok(())
}
