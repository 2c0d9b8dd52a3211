use http::StatusCode;
use khc_core::HttpError;
use thiserror::Error;

/// The device address could not be resolved
///
/// Every variant is a permission failure. The variants only refine the log
/// message; callers treat them alike.
#[derive(Debug, Error)]
pub enum AddressError {
    /// Lookup succeeded but carried no postal code
    #[error("postal code not available")]
    Unavailable,

    /// The user has not granted address access
    #[error("missing permissions for device address")]
    Forbidden,

    /// The address API answered with an unexpected status
    #[error("failed to get postal code: {0}")]
    Status(u16),

    /// The address API could not be reached in time
    #[error("failed to get postal code: {0}")]
    Transport(#[from] reqwest::Error),

    /// The address API answered 200 with a body that is not JSON
    #[error("failed to decode device address: {0}")]
    Decode(String),
}

/// Errors raised while dispatching a skill request
#[derive(Debug, Error)]
pub enum SkillError {
    /// No registered handler accepts the request type
    #[error("no handler for request type '{request_type}'")]
    Unhandled {
        /// The request's type discriminator
        request_type: String,
    },
}

impl HttpError for SkillError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unhandled { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Unhandled { .. } => "unhandled_request",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
