use super::common;

use axum::http::StatusCode;
use bfhl_console::adapters::ReqwestTransport;
use bfhl_console::application::Controller;
use bfhl_console::domain::ServerStatus;
use common::stub_service::{StubReply, StubService};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_running_server_shows_message() {
    let service = StubService::replying(json!({})).await;
    let controller = Controller::new(
        ReqwestTransport::new(&service.base_url, Duration::from_secs(5)).unwrap(),
    );

    let status = controller.check_status().await;
    assert!(status.is_running());
    assert_eq!(status.to_string(), "Server is running. BFHL service is up");
    assert_eq!(controller.snapshot().status, status);
}

#[tokio::test]
async fn test_error_status_is_not_running() {
    let service = StubService::start(
        StubReply::json(StatusCode::SERVICE_UNAVAILABLE, json!({"message": "down"})),
        |_| StubReply::ok(json!({})),
    )
    .await;
    let controller = Controller::new(
        ReqwestTransport::new(&service.base_url, Duration::from_secs(5)).unwrap(),
    );

    let status = controller.check_status().await;
    assert_eq!(
        status.to_string(),
        "Server is not responding. Error: Request failed with status code 503"
    );

    // A failed health check never blocks submission
    assert!(controller.submit(r#"{"data":[]}"#).await.is_ok());
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = Controller::new(
        ReqwestTransport::new(format!("http://{}", addr), Duration::from_secs(2)).unwrap(),
    );

    let status = controller.check_status().await;
    assert!(matches!(status, ServerStatus::Unreachable { .. }));
    assert!(status
        .to_string()
        .starts_with("Server is not responding. Error: "));
}
