use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use khc_skill::CheckEvent;
use serde_json::Value;

/// Handle `POST /check`
///
/// Any JSON body is accepted and ends in a check result. The HTTP status
/// mirrors the `statusCode` reported in the body.
pub async fn check_handler(Json(body): Json<Value>) -> Response {
    let result = CheckEvent::from_json(&body).check();
    let status = StatusCode::from_u16(result.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    tracing::debug!(status = %status.as_u16(), "postal code checked");

    (status, Json(result)).into_response()
}
