//! Logging for KHC
//!
//! Installs a `tracing-subscriber` registry with an env filter and a text
//! or JSON `fmt` layer

use khc_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging from configuration
///
/// `RUST_LOG` takes precedence over the configured filter. An invalid
/// filter falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = build_filter(&config.log_filter);
    let effective_filter = filter.to_string();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json().flatten_event(true)).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(filter = %effective_filter, format = ?config.format, "logging initialized");

    Ok(())
}

/// Build the effective filter, preferring `RUST_LOG` when it is set
fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_string(configured: &str) -> String {
        build_filter(configured).to_string().to_lowercase()
    }

    #[test]
    fn configured_filter_applies_without_rust_log() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert_eq!(filter_string("khc=debug"), "khc=debug");
        });
    }

    #[test]
    fn invalid_filter_falls_back_to_info() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert_eq!(filter_string("khc=loud"), "info");
        });
    }

    #[test]
    fn rust_log_takes_precedence() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            assert_eq!(filter_string("debug"), "warn");
        });
    }

    #[test]
    fn init_installs_subscriber_once() {
        let config = TelemetryConfig::default();

        init(&config).unwrap();
        tracing::info!("subscriber installed");

        assert!(init(&config).is_err());
    }
}
