use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Shorts-weather voice skill
#[derive(Debug, Parser)]
#[command(name = "khc", about = "Tells you whether today is a day for shorts")]
pub struct Args {
    /// Path to configuration file; defaults apply when it does not exist
    #[arg(short, long, default_value = "khc.toml", env = "KHC_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "KHC_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Completion API key, overriding `llm.api_key`
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub openrouter_api_key: Option<String>,
}
