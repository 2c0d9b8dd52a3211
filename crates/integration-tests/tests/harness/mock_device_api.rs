//! Mock device settings API for integration tests
//!
//! Serves the `countryAndPostalCode` lookup for a single test device

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::json;
use tokio_util::sync::CancellationToken;

pub const DEVICE_ID: &str = "amzn1.ask.device.test";
pub const ACCESS_TOKEN: &str = "device-access-token";

/// Mock device address backend
pub struct MockDeviceApi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    status: u16,
    postal_code: Option<String>,
    request_count: AtomicU32,
}

impl MockDeviceApi {
    /// Start a mock that reports `postal_code` for the test device
    pub async fn with_postal_code(postal_code: &str) -> anyhow::Result<Self> {
        Self::start(200, Some(postal_code.to_owned())).await
    }

    /// Start a mock that answers every lookup with a bare `status`
    pub async fn with_status(status: u16) -> anyhow::Result<Self> {
        Self::start(status, None).await
    }

    async fn start(status: u16, postal_code: Option<String>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            status,
            postal_code,
            request_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route(
                "/v1/devices/{device_id}/settings/address/countryAndPostalCode",
                routing::get(handle_address),
            )
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

    /// Value for `context.System.apiEndpoint`
    pub fn api_endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of address lookups received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockDeviceApi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_address(
    State(state): State<Arc<MockState>>,
    Path(device_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {ACCESS_TOKEN}"));
    if !authorized || device_id != DEVICE_ID {
        return StatusCode::FORBIDDEN.into_response();
    }

    if state.status != 200 {
        let status = StatusCode::from_u16(state.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return status.into_response();
    }

    let mut body = json!({"countryCode": "DE"});
    if let Some(postal_code) = &state.postal_code {
        body["postalCode"] = json!(postal_code);
    }
    Json(body).into_response()
}
