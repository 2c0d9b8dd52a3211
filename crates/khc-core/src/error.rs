use http::StatusCode;

/// Trait for domain errors that can be converted to HTTP responses
///
/// The server layer turns these into JSON error bodies, keeping the
/// skill crates decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `unhandled_request`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}
