use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use khc_alexa::{RequestEnvelope, Skill};

use crate::error::error_response;

/// Handle `POST /alexa`
pub async fn alexa_handler(State(skill): State<Skill>, Json(envelope): Json<RequestEnvelope>) -> Response {
    let request_type = envelope.request.request_type.clone();

    match skill.dispatch(envelope).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::warn!(%request_type, error = %e, "skill request rejected");
            error_response(&e)
        }
    }
}
