use super::common;

use axum::http::StatusCode;
use bfhl_console::adapters::ReqwestTransport;
use bfhl_console::application::{Action, Controller};
use bfhl_console::domain::{ResponseField, SubmitError};
use common::stub_service::{StubReply, StubService};
use serde_json::json;
use std::time::Duration;

fn controller_for(service: &StubService) -> Controller<ReqwestTransport> {
    Controller::new(ReqwestTransport::new(&service.base_url, Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn test_valid_input_posts_exactly_once() {
    let service = StubService::replying(json!({
        "is_success": true,
        "numbers": ["1", "2"],
        "alphabets": ["A", "B"],
        "highest_lowercase_alphabet": [],
    }))
    .await;
    let controller = controller_for(&service);

    let response = controller
        .submit(r#"{"data":["A","1","B","2"]}"#)
        .await
        .unwrap();

    assert_eq!(service.received(), vec![json!({"data": ["A", "1", "B", "2"]})]);
    assert_eq!(response.get("numbers"), Some(&json!(["1", "2"])));

    controller.dispatch(Action::SelectionReplaced(vec![ResponseField::Numbers]));
    assert_eq!(
        controller.projection().unwrap().to_value(),
        json!({"numbers": ["1", "2"]})
    );
}

#[tokio::test]
async fn test_projection_order_follows_selection() {
    let service = StubService::replying(json!({
        "numbers": ["1", "2"],
        "alphabets": ["A", "B"],
    }))
    .await;
    let controller = controller_for(&service);
    controller.submit(r#"{"data":["A","1","B","2"]}"#).await.unwrap();

    controller.dispatch(Action::SelectionReplaced(vec![
        ResponseField::Alphabets,
        ResponseField::Numbers,
    ]));
    let first = controller.projection().unwrap().to_pretty_json();
    assert!(first.find("alphabets").unwrap() < first.find("numbers").unwrap());

    controller.dispatch(Action::SelectionReplaced(vec![
        ResponseField::Numbers,
        ResponseField::Alphabets,
    ]));
    let second = serde_json::to_string(&controller.projection().unwrap()).unwrap();
    assert_eq!(second, r#"{"numbers":["1","2"],"alphabets":["A","B"]}"#);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_server() {
    let service = StubService::replying(json!({})).await;
    let controller = controller_for(&service);

    assert_eq!(
        controller.submit("{not json").await,
        Err(SubmitError::InvalidJson)
    );
    assert_eq!(controller.submit("{}").await, Err(SubmitError::DataNotArray));
    assert_eq!(
        controller.submit(r#"{"data":"x"}"#).await,
        Err(SubmitError::DataNotArray)
    );

    assert!(service.received().is_empty());
}

#[tokio::test]
async fn test_full_object_is_forwarded() {
    let service = StubService::replying(json!({"file_valid": true})).await;
    let controller = controller_for(&service);

    controller
        .submit(r#"{"data":[1,"b"],"file_b64":"aGVsbG8=","note":"kept"}"#)
        .await
        .unwrap();

    assert_eq!(
        service.received(),
        vec![json!({"data": [1, "b"], "file_b64": "aGVsbG8=", "note": "kept"})]
    );
}

#[tokio::test]
async fn test_server_error_reports_status_and_message() {
    let service = StubService::start(StubReply::ok(json!({})), |_| {
        StubReply::json(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"message": "bad data"}),
        )
    })
    .await;
    let controller = controller_for(&service);

    let err = controller.submit(r#"{"data":[]}"#).await.unwrap_err();
    let text = err.to_string();
    assert!(text.contains("500"), "{text}");
    assert!(text.contains("bad data"), "{text}");
    assert_eq!(controller.snapshot().error(), Some(&err));
}

#[tokio::test]
async fn test_server_error_without_message_shows_body() {
    let service = StubService::start(StubReply::ok(json!({})), |_| {
        StubReply::json(StatusCode::BAD_REQUEST, json!({"is_success": false}))
    })
    .await;
    let controller = controller_for(&service);

    let err = controller.submit(r#"{"data":[]}"#).await.unwrap_err();
    assert_eq!(err.to_string(), r#"API error: 400 - {"is_success":false}"#);
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = Controller::new(
        ReqwestTransport::new(format!("http://{}", addr), Duration::from_secs(2)).unwrap(),
    );

    let err = controller.submit(r#"{"data":[]}"#).await.unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
    assert!(err.to_string().starts_with("Network error"));
}

#[tokio::test]
async fn test_timeout_is_a_network_error() {
    let service = StubService::start(StubReply::ok(json!({})), |_| {
        StubReply::ok(json!({})).delayed(Duration::from_secs(2))
    })
    .await;
    let controller = Controller::new(
        ReqwestTransport::new(&service.base_url, Duration::from_millis(200)).unwrap(),
    );

    let err = controller.submit(r#"{"data":[]}"#).await.unwrap_err();
    assert!(err.to_string().starts_with("Network error"), "{err}");
}

#[tokio::test]
async fn test_non_object_reply_is_reported() {
    let service = StubService::replying(json!(["not", "an", "object"])).await;
    let controller = controller_for(&service);

    let err = controller.submit(r#"{"data":[]}"#).await.unwrap_err();
    assert_eq!(err.to_string(), "Error: Response body is not a JSON object");
}

#[tokio::test]
async fn test_latest_submission_wins() {
    let service = StubService::start(StubReply::ok(json!({})), |body| {
        let reply = StubReply::ok(json!({"alphabets": body["data"].clone()}));
        if body["data"][0] == "slow" {
            reply.delayed(Duration::from_millis(400))
        } else {
            reply
        }
    })
    .await;
    let controller = controller_for(&service);

    let (first, second) = tokio::join!(
        controller.submit(r#"{"data":["slow"]}"#),
        controller.submit(r#"{"data":["fast"]}"#),
    );
    assert!(first.is_ok());
    assert!(second.is_ok());

    // The slow reply arrived last but belongs to an older submission
    let state = controller.snapshot();
    assert_eq!(state.latest_seq(), 2);
    assert_eq!(
        state.response().unwrap().get("alphabets"),
        Some(&json!(["fast"]))
    );
    assert_eq!(service.received().len(), 2);
}

#[tokio::test]
async fn test_new_submission_clears_stale_response() {
    let service = StubService::replying(json!({"numbers": ["7"]})).await;
    let controller = controller_for(&service);

    controller.submit(r#"{"data":["7"]}"#).await.unwrap();
    assert!(controller.snapshot().response().is_some());

    controller.submit("][").await.unwrap_err();
    let state = controller.snapshot();
    assert!(state.response().is_none());
    assert!(state.projection().is_none());
    assert_eq!(state.error(), Some(&SubmitError::InvalidJson));
}
