use crate::envelope::{OutputSpeech, Response, ResponseEnvelope};

/// Envelope format version the skill answers with
const RESPONSE_VERSION: &str = "1.0";

/// Fluent builder for [`ResponseEnvelope`]
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text the device speaks
    #[must_use]
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.response.output_speech = Some(OutputSpeech::PlainText { text: text.into() });
        self
    }

    /// Decide whether the session closes after this response
    #[must_use]
    pub const fn should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn build(self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: RESPONSE_VERSION.to_owned(),
            response: self.response,
        }
    }
}
