//! Liveness checks against a real listener.

mod common;

use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use prebid_status::api;
use prebid_status::probe::StatusProbe;
use prebid_status::ServiceError;

use common::{spawn_api, spawn_down, spawn_unavailable, UNREACHABLE_STATUS_URL};

#[tokio::test]
async fn check_succeeds_against_running_server() {
    let server = spawn_api().await;
    let probe = StatusProbe::new(server.status_url(), Duration::from_secs(5)).unwrap();

    let status = probe.check().await.unwrap();
    assert!(status.is_up());
    assert_eq!(status.service, "prebid-server");
}

#[tokio::test]
async fn check_reports_non_success_code() {
    let server = spawn_unavailable().await;
    let probe = StatusProbe::new(server.status_url(), Duration::from_secs(5)).unwrap();

    match probe.check().await {
        Err(ServiceError::UnexpectedStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn check_rejects_service_that_is_not_up() {
    let server = spawn_down().await;
    let probe = StatusProbe::new(server.status_url(), Duration::from_secs(5)).unwrap();

    match probe.check().await {
        Err(ServiceError::NotUp { status }) => assert_eq!(status, "DOWN"),
        other => panic!("expected NotUp, got {:?}", other),
    }
}

#[tokio::test]
async fn check_fails_when_nothing_listens() {
    let probe = StatusProbe::new(UNREACHABLE_STATUS_URL, Duration::from_secs(2)).unwrap();
    assert!(matches!(probe.check().await, Err(ServiceError::Http(_))));
}

#[tokio::test]
async fn server_stops_on_shutdown_signal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(api::serve(listener, async move {
        let _ = rx.await;
    }));

    tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server exits after shutdown")
        .unwrap();
    assert!(result.is_ok());
}
