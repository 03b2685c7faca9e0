//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use function_logging::config::{AuthConfig, BackendConfig, LoggingConfig};

/// One request received by the mock `entries:write` endpoint.
#[derive(Debug, Clone)]
pub struct RecordedWrite {
    pub authorization: Option<String>,
    pub body: Value,
}

/// Mock Cloud Logging API plus a metadata token endpoint.
#[derive(Clone, Default)]
pub struct MockLoggingApi {
    writes: Arc<Mutex<Vec<RecordedWrite>>>,
    fail_status: Arc<AtomicU16>,
    token_fetches: Arc<AtomicU32>,
}

impl MockLoggingApi {
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    /// Answer every write with `status`; 0 restores success.
    pub fn fail_with(&self, status: u16) {
        self.fail_status.store(status, Ordering::SeqCst);
    }

    pub fn token_fetches(&self) -> u32 {
        self.token_fetches.load(Ordering::SeqCst)
    }
}

/// Start the mock on an ephemeral port.
pub async fn start_mock_logging_api() -> (SocketAddr, MockLoggingApi) {
    let api = MockLoggingApi::default();
    let app = Router::new()
        .route("/v2/entries:write", post(write_entries))
        .route("/token", get(token))
        .with_state(api.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, api)
}

async fn write_entries(
    State(api): State<MockLoggingApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    api.writes
        .lock()
        .unwrap()
        .push(RecordedWrite { authorization, body });

    match api.fail_status.load(Ordering::SeqCst) {
        0 => StatusCode::OK,
        code => StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn token(State(api): State<MockLoggingApi>, headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if headers.get("Metadata-Flavor").and_then(|v| v.to_str().ok()) != Some("Google") {
        return Err(StatusCode::FORBIDDEN);
    }
    api.token_fetches.fetch_add(1, Ordering::SeqCst);
    Ok(Json(json!({
        "access_token": "meta-token",
        "expires_in": 3600,
        "token_type": "Bearer"
    })))
}

/// Configuration pointing at the mock with a fixed token.
pub fn config_for(addr: SocketAddr) -> LoggingConfig {
    LoggingConfig {
        project_id: "test-project".into(),
        function_name: "hello".into(),
        function_region: "us-central1".into(),
        backend: BackendConfig {
            endpoint: format!("http://{}", addr),
            auth: AuthConfig {
                access_token: Some("test-token".into()),
                ..AuthConfig::default()
            },
            ..BackendConfig::default()
        },
    }
}

/// An address nothing listens on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
