use khc_core::Locale;
use serde::Deserialize;

/// Skill behaviour configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillConfig {
    /// Language for prompts and spoken responses
    #[serde(default)]
    pub locale: Locale,
}
