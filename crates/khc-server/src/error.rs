use axum::Json;
use axum::response::{IntoResponse, Response};
use khc_core::HttpError;

/// Render a domain error as a JSON error body
pub fn error_response<E: HttpError>(error: &E) -> Response {
    let body = serde_json::json!({
        "error": {
            "message": error.client_message(),
            "type": error.error_type(),
        }
    });

    (error.status_code(), Json(body)).into_response()
}
