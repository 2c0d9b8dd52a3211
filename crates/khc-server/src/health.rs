use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness probe; the skill has no dependencies worth probing
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
