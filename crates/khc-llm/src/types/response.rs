use serde_json::{Map, Value};

use crate::error::CompletionError;

/// Chat completion response body
///
/// Only `choices` is read. Choices are kept as raw JSON objects so a
/// missing message or content stays data rather than a decoding error.
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    choices: Vec<Map<String, Value>>,
}

impl CompletionResponse {
    /// Read a response from decoded JSON
    ///
    /// An absent `choices` field yields an empty response.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Parse`] when the body is not an object or
    /// `choices` is present but not a list of objects
    pub fn from_json(data: &Value) -> Result<Self, CompletionError> {
        let Some(object) = data.as_object() else {
            return Err(CompletionError::Parse("response body is not a JSON object".to_owned()));
        };

        let choices = match object.get("choices") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_object().cloned())
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| CompletionError::Parse("invalid 'choices' structure in response".to_owned()))?,
            Some(_) => return Err(CompletionError::Parse("invalid 'choices' structure in response".to_owned())),
        };

        Ok(Self { choices })
    }

    /// Text of the first choice's message, if present and non-empty
    pub fn message_content(&self) -> Option<&str> {
        let content = self
            .choices
            .first()
            .and_then(|choice| choice.get("message"))
            .and_then(Value::as_object)
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .filter(|content| !content.is_empty());

        if content.is_none() {
            tracing::warn!(choices = self.choices.len(), "response JSON structure unexpected or empty");
        }

        content
    }
}
