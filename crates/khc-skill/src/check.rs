//! Standalone postal code check
//!
//! Validates the format of a postal code carried by a generic event and
//! echoes the input back. No lookups happen on this path.

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use serde_json::Value;

const ACCEPTED_MESSAGE: &str = "Request processed successfully";
const REJECTED_MESSAGE: &str = "Invalid postal code. Must be 5 digits.";

/// Event accepted by the check
///
/// Only `postal_code` and `use_ai` are read; gateway envelope fields and
/// any other keys are ignored. Both are kept as raw JSON so a wrong type
/// ends in a [`CheckResult`] instead of a decoding error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEvent {
    pub postal_code: Value,
    /// Echoed back unchanged on success; `false` when absent
    pub use_ai: Value,
}

impl Default for CheckEvent {
    fn default() -> Self {
        Self {
            postal_code: Value::Null,
            use_ai: Value::Bool(false),
        }
    }
}

/// Outcome of [`CheckEvent::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Postal code is well-formed
    Accepted { postal_code: String, use_ai: Value },
    /// Postal code is missing or malformed
    Rejected,
}

impl CheckResult {
    /// HTTP-like status reported in the result body
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Accepted { .. } => 200,
            Self::Rejected => 400,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => ACCEPTED_MESSAGE,
            Self::Rejected => REJECTED_MESSAGE,
        }
    }
}

impl Serialize for CheckResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Accepted { postal_code, use_ai } => {
                let mut state = serializer.serialize_struct("CheckResult", 4)?;
                state.serialize_field("statusCode", &self.status_code())?;
                state.serialize_field("postal_code", postal_code)?;
                state.serialize_field("use_ai", use_ai)?;
                state.serialize_field("message", self.message())?;
                state.end()
            }
            Self::Rejected => {
                let mut state = serializer.serialize_struct("CheckResult", 2)?;
                state.serialize_field("statusCode", &self.status_code())?;
                state.serialize_field("message", self.message())?;
                state.end()
            }
        }
    }
}

impl CheckEvent {
    /// Read the event from any decoded JSON body
    ///
    /// A body that is not an object reads as an event without a postal code.
    pub fn from_json(data: &Value) -> Self {
        let mut event = Self::default();

        if let Some(postal_code) = data.get("postal_code") {
            event.postal_code = postal_code.clone();
        }
        if let Some(use_ai) = data.get("use_ai") {
            event.use_ai = use_ai.clone();
        }

        event
    }

    /// Validate the postal code and echo the event
    pub fn check(&self) -> CheckResult {
        match self.postal_code.as_str() {
            Some(postal_code) if is_valid_postal_code(postal_code) => CheckResult::Accepted {
                postal_code: postal_code.to_owned(),
                use_ai: self.use_ai.clone(),
            },
            _ => CheckResult::Rejected,
        }
    }
}

/// Exactly five ASCII digits; leading zeros allowed
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    postal_code.len() == 5 && postal_code.bytes().all(|b| b.is_ascii_digit())
}
