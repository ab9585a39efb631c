//! Test servers bound to ephemeral loopback ports.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{http::StatusCode, routing::get, Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use prebid_status::api;
use prebid_status::status::HealthStatus;

/// A server running in the background; dropping it shuts the server down.
pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    /// URL of the liveness endpoint.
    pub fn status_url(&self) -> String {
        format!("http://{}/status", self.addr)
    }
}

/// Run the real API.
pub async fn spawn_api() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(api::serve(listener, async move {
        let _ = rx.await;
    }));

    TestServer {
        addr,
        _shutdown: tx,
    }
}

/// Run an arbitrary router.
pub async fn spawn_router(router: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await
    });

    TestServer {
        addr,
        _shutdown: tx,
    }
}

/// A `/status` that answers 503.
pub async fn spawn_unavailable() -> TestServer {
    spawn_router(Router::new().route(
        "/status",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await
}

/// A `/status` that answers 200 but reports DOWN.
pub async fn spawn_down() -> TestServer {
    spawn_router(Router::new().route(
        "/status",
        get(|| async {
            Json(HealthStatus {
                status: "DOWN".to_string(),
                service: "prebid-server".to_string(),
                timestamp: 0,
            })
        }),
    ))
    .await
}

/// Loopback URL nothing listens on (port 1 is reserved and unbound).
pub const UNREACHABLE_STATUS_URL: &str = "http://127.0.0.1:1/status";
