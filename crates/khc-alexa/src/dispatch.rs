use std::sync::Arc;

use async_trait::async_trait;

use crate::envelope::{RequestEnvelope, ResponseEnvelope, SystemState};
use crate::error::SkillError;
use crate::response::ResponseBuilder;

/// Request type sent when a skill is opened without an intent
pub const LAUNCH_REQUEST: &str = "LaunchRequest";

/// Everything a handler gets to see about one request
#[derive(Debug, Clone)]
pub struct HandlerInput {
    envelope: RequestEnvelope,
}

impl HandlerInput {
    pub const fn new(envelope: RequestEnvelope) -> Self {
        Self { envelope }
    }

    pub const fn envelope(&self) -> &RequestEnvelope {
        &self.envelope
    }

    /// Type discriminator of the inner request
    pub fn request_type(&self) -> &str {
        &self.envelope.request.request_type
    }

    /// Device id, API endpoint and access token of this request
    pub const fn system(&self) -> &SystemState {
        &self.envelope.context.system
    }

    /// Fresh builder for this request's response
    #[allow(clippy::unused_self)]
    pub fn response_builder(&self) -> ResponseBuilder {
        ResponseBuilder::new()
    }
}

/// Whether `input` carries a request of exactly `request_type`
pub fn is_request_type(input: &HandlerInput, request_type: &str) -> bool {
    input.request_type() == request_type
}

/// A handler for one kind of skill request
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Capability check run before [`handle`](Self::handle)
    fn can_handle(&self, input: &HandlerInput) -> bool;

    /// Produce the response for an accepted request
    async fn handle(&self, input: &HandlerInput) -> ResponseEnvelope;
}

/// Registered handlers, consulted in registration order
#[derive(Clone)]
pub struct Skill {
    handlers: Arc<[Arc<dyn RequestHandler>]>,
}

impl std::fmt::Debug for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skill")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    /// Route a request to the first handler that accepts it
    ///
    /// # Errors
    ///
    /// Returns `SkillError::Unhandled` when no handler accepts the request
    pub async fn dispatch(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        let input = HandlerInput::new(envelope);

        let Some(handler) = self.handlers.iter().find(|h| h.can_handle(&input)) else {
            tracing::warn!(request_type = %input.request_type(), "no handler accepts request");
            return Err(SkillError::Unhandled {
                request_type: input.request_type().to_owned(),
            });
        };

        tracing::debug!(
            request_type = %input.request_type(),
            request_id = input.envelope().request.request_id.as_deref().unwrap_or("-"),
            "dispatching request"
        );

        Ok(handler.handle(&input).await)
    }
}

/// Collects handlers for a [`Skill`]
#[derive(Default)]
pub struct SkillBuilder {
    handlers: Vec<Arc<dyn RequestHandler>>,
}

impl SkillBuilder {
    /// Register a handler; earlier registrations win
    #[must_use]
    pub fn add_request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            handlers: self.handlers.into(),
        }
    }
}
