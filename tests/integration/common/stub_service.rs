//! Stand-in for the remote BFHL service.
//!
//! Records every body posted to `/bfhl` and answers through a caller-supplied
//! responder, so tests control status, body and latency per request.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl StubReply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::json(StatusCode::OK, body)
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl IntoResponse for StubReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

type Responder = Arc<dyn Fn(&Value) -> StubReply + Send + Sync>;

#[derive(Clone)]
struct StubState {
    health: StubReply,
    responder: Responder,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct StubService {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubService {
    pub async fn start(
        health: StubReply,
        responder: impl Fn(&Value) -> StubReply + Send + Sync + 'static,
    ) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            health,
            responder: Arc::new(responder),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/", get(health_check))
            .route("/bfhl", post(process))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubService {
            base_url: format!("http://{}", addr),
            received,
        }
    }

    /// Healthy service answering every submission with `body`
    pub async fn replying(body: Value) -> Self {
        Self::start(
            StubReply::ok(serde_json::json!({"message": "BFHL service is up"})),
            move |_| StubReply::ok(body.clone()),
        )
        .await
    }

    /// Bodies posted to `/bfhl`, in arrival order
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn health_check(State(state): State<StubState>) -> StubReply {
    let reply = state.health.clone();
    tokio::time::sleep(reply.delay).await;
    reply
}

async fn process(State(state): State<StubState>, Json(body): Json<Value>) -> StubReply {
    state.received.lock().unwrap().push(body.clone());
    let reply = (state.responder)(&body);
    tokio::time::sleep(reply.delay).await;
    reply
}
