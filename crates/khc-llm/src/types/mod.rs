//! Wire types for the chat completion endpoint

pub mod request;
pub mod response;

pub use request::{CompletionRequest, Message, Role};
pub use response::CompletionResponse;
