// tests/test_helpers.rs
// Fake upstream gateway and app wiring shared by integration tests

#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use promptforge::config::GatewayConfig;
use promptforge::handler::RequestHandler;
use promptforge::llm::GatewayClient;
use promptforge::web::{self, AppState};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_KEY: &str = "test-key";
pub const TEST_MODEL: &str = "test-model";

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<Value>>>,
    last_auth: Arc<Mutex<Option<String>>>,
}

/// A local stand-in for the chat-completion gateway that always answers the same way
pub struct FakeUpstream {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<Value>>>,
    last_auth: Arc<Mutex<Option<String>>>,
}

impl FakeUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Value> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn last_auth(&self) -> Option<String> {
        self.last_auth.lock().unwrap().clone()
    }

    pub fn handler(&self) -> RequestHandler {
        handler_for(&self.url, Some(TEST_KEY))
    }
}

async fn respond(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_request.lock().unwrap() = serde_json::from_str(&body).ok();
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (state.status, state.body.clone())
}

pub async fn spawn_upstream(status: u16, body: impl Into<String>) -> FakeUpstream {
    let state = UpstreamState {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.into(),
        hits: Arc::new(AtomicUsize::new(0)),
        last_request: Arc::new(Mutex::new(None)),
        last_auth: Arc::new(Mutex::new(None)),
    };
    let upstream = FakeUpstream {
        url: String::new(),
        hits: state.hits.clone(),
        last_request: state.last_request.clone(),
        last_auth: state.last_auth.clone(),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(respond))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        url: format!("http://{}/v1/chat/completions", addr),
        ..upstream
    }
}

/// Success body in the gateway's shape
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "cmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

pub fn handler_for(api_url: &str, api_key: Option<&str>) -> RequestHandler {
    let config = GatewayConfig::new(api_key.map(str::to_string), api_url, TEST_MODEL);
    RequestHandler::new(GatewayClient::new(config))
}

pub fn app_for(handler: RequestHandler) -> Router {
    web::create_router(AppState::new(handler))
}

/// Serve the real router on an ephemeral port; returns the generate endpoint URL
pub async fn spawn_app(handler: RequestHandler) -> String {
    let app = app_for(handler);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/generate-prompt", addr)
}
