use serde::Serialize;

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant response
    Assistant,
}

/// Message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Role of the message author
    pub role: Role,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat completion request body
///
/// Built per call and serialized as-is; fields are never changed after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens,
        }
    }

    /// Single-turn request carrying one user prompt
    pub fn prompt(model: impl Into<String>, prompt: &str, max_tokens: u32) -> Self {
        Self::new(model, vec![Message::user(prompt)], max_tokens)
    }
}
