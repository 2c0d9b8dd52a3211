#![allow(clippy::must_use_candidate)]

pub mod alexa;
mod duration;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod skill;
pub mod telemetry;

use serde::Deserialize;

pub use alexa::*;
pub use health::*;
pub use llm::*;
pub use server::*;
pub use skill::*;
pub use telemetry::*;

/// Top-level KHC configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion API configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Device address API configuration
    #[serde(default)]
    pub alexa: AlexaConfig,
    /// Skill behaviour
    #[serde(default)]
    pub skill: SkillConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
