//! Request and response envelopes exchanged with the voice platform
//!
//! Only the fields the skill reads are typed; everything else in the
//! inbound JSON is ignored.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound skill request
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    /// Envelope format version
    #[serde(default)]
    pub version: String,
    /// Session attributes, passed through untouched
    #[serde(default)]
    pub session: Option<Value>,
    /// Device and API context
    pub context: Context,
    /// The request itself
    pub request: Request,
}

/// Context block of the request envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemState,
}

/// Platform state needed to call back into platform APIs
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    /// Device the request came from
    pub device: Device,
    /// Base URL of the platform API for this request's region
    pub api_endpoint: String,
    /// Short-lived token authorizing platform API calls
    pub api_access_token: SecretString,
}

/// Requesting device
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
}

/// Request body of the envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Discriminator such as `LaunchRequest` or `IntentRequest`
    #[serde(rename = "type")]
    pub request_type: String,
    /// Platform id of this request, carried into logs
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Outbound skill response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: Response,
}

/// Response body of the envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    /// Left out unless a handler decides; the platform then keeps its default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Speech the device reads out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } => text,
        }
    }
}
