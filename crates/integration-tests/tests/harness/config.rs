//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::time::Duration;

use khc_config::{Config, HealthConfig, ServerConfig};
use khc_core::Locale;
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no API key
    pub fn new() -> Self {
        let mut config = Config {
            server: ServerConfig {
                listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                health: HealthConfig::default(),
            },
            ..Config::default()
        };
        config.alexa.timeout = Duration::from_secs(2);
        config.llm.timeout = Duration::from_secs(2);

        Self { config }
    }

    /// Point the completion client at a mock backend with a test key
    pub fn with_openrouter(mut self, base_url: &str) -> Self {
        self.config.llm.base_url = base_url.parse().expect("valid URL");
        self.config.llm.api_key = Some(SecretString::from("test-key"));
        self
    }

    /// Point the completion client at a mock backend without any key
    pub fn with_openrouter_without_key(mut self, base_url: &str) -> Self {
        self.config.llm.base_url = base_url.parse().expect("valid URL");
        self.config.llm.api_key = None;
        self
    }

    /// Set the skill locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.config.skill.locale = locale;
        self
    }

    /// Set the completion timeout
    pub fn with_llm_timeout(mut self, timeout: Duration) -> Self {
        self.config.llm.timeout = timeout;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
