//! Chat completion client for the skill
//!
//! Sends one prompt to an OpenAI-compatible completion endpoint and always
//! hands back speakable text: every failure collapses into a fixed,
//! localized fallback sentence.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
pub mod error;
pub mod types;

pub use client::{ChatCompletion, DEFAULT_MAX_TOKENS, OpenRouterClient};
pub use error::CompletionError;
pub use types::{CompletionRequest, CompletionResponse, Message, Role};
