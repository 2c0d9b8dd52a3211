use thiserror::Error;

/// Failures of a single completion call
///
/// None of these reach the caller of
/// [`ChatCompletion::chat_completion`](crate::ChatCompletion::chat_completion);
/// they are logged and replaced by fallback text.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key was configured
    #[error("API key is not set")]
    MissingApiKey,

    /// Connection, DNS or timeout failure
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a 4xx/5xx status
    #[error("upstream returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Body was not JSON or `choices` had the wrong shape
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Response was well-formed but carried no usable text
    #[error("response carried no message content")]
    NoContent,
}
