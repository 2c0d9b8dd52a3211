use std::time::Duration;

use serde::Deserialize;

/// Voice platform (device address API) configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlexaConfig {
    /// Timeout for the device address lookup
    #[serde(default = "default_timeout", with = "crate::duration")]
    pub timeout: Duration,
}

impl Default for AlexaConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

const fn default_timeout() -> Duration {
    Duration::from_secs(3)
}
