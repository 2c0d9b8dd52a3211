//! Mock completion backend for integration tests
//!
//! Serves `POST /api/v1/chat/completions` with a canned answer and records
//! every request it sees

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// How the mock answers completion requests
#[derive(Debug, Clone)]
pub enum Behavior {
    /// 200 with the given message content
    Answer(String),
    /// 200 with an empty `choices` array
    NoChoices,
    /// Bare status with a short error body
    Status(u16),
    /// Answer after a delay
    Slow(Duration, String),
}

/// Mock completion backend
pub struct MockOpenRouter {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    behavior: Behavior,
    completion_count: AtomicU32,
    last_request: Mutex<Option<RecordedRequest>>,
}

/// What the mock saw on the most recent request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

impl MockOpenRouter {
    /// Start a mock that answers with `content`
    pub async fn start_with_answer(content: &str) -> anyhow::Result<Self> {
        Self::start(Behavior::Answer(content.to_owned())).await
    }

    /// Start a mock with arbitrary behavior
    pub async fn start(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            completion_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/api/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for `llm.base_url`
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.last_request.lock().expect("lock").clone()
    }
}

impl Drop for MockOpenRouter {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    *state.last_request.lock().expect("lock") = Some(RecordedRequest { authorization, body });

    match &state.behavior {
        Behavior::Answer(content) => Json(completion(content)).into_response(),
        Behavior::NoChoices => Json(json!({"id": "cmpl-mock", "choices": []})).into_response(),
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "mock failure").into_response()
        }
        Behavior::Slow(delay, content) => {
            tokio::time::sleep(*delay).await;
            Json(completion(content)).into_response()
        }
    }
}

fn completion(content: &str) -> Value {
    json!({
        "id": "cmpl-mock",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
