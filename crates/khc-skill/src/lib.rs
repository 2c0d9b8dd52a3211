//! The shorts-weather skill
//!
//! Wires the device address lookup, the advice generator and the launch
//! handler into a dispatchable [`Skill`], and provides the standalone
//! postal code check.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod advice;
pub mod check;
mod launch;

use std::sync::Arc;

use khc_alexa::{DeviceAddressClient, Skill};
use khc_config::Config;
use khc_llm::OpenRouterClient;

pub use advice::{Advisor, ShortsAdvisor};
pub use check::{CheckEvent, CheckResult, is_valid_postal_code};
pub use launch::LaunchRequestHandler;

/// Build the skill with its production collaborators
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be constructed
pub fn build_skill(config: &Config) -> anyhow::Result<Skill> {
    let locale = config.skill.locale;

    let completion = OpenRouterClient::new(&config.llm, locale)
        .map_err(|e| anyhow::anyhow!("failed to build completion client: {e}"))?;
    let address = DeviceAddressClient::new(&config.alexa)
        .map_err(|e| anyhow::anyhow!("failed to build device address client: {e}"))?;

    let advisor = ShortsAdvisor::new(Arc::new(completion), locale).with_max_tokens(config.llm.max_tokens);
    let launch = LaunchRequestHandler::new(Arc::new(address), Arc::new(advisor), locale);

    Ok(Skill::builder().add_request_handler(launch).build())
}
