//! Voice platform plumbing for the skill
//!
//! Request/response envelopes, a first-match handler dispatcher and the
//! device address lookup.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod address;
mod dispatch;
pub mod envelope;
pub mod error;
mod response;

pub use address::{AddressLookup, DeviceAddress, DeviceAddressClient};
pub use dispatch::{HandlerInput, LAUNCH_REQUEST, RequestHandler, Skill, SkillBuilder, is_request_type};
pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use error::{AddressError, SkillError};
pub use response::ResponseBuilder;
