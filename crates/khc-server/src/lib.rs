//! HTTP surface of the skill
//!
//! Hosts the voice platform endpoint, the standalone postal code check and
//! a health probe.

mod alexa;
mod check;
mod error;
mod health;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use khc_alexa::Skill;
use khc_config::{Config, ServerConfig};
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server and its production skill from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the skill's HTTP clients cannot be constructed
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let skill = khc_skill::build_skill(config)?;
        Ok(Self::with_skill(skill, &config.server))
    }

    /// Build the server around an already assembled skill
    pub fn with_skill(skill: Skill, config: &ServerConfig) -> Self {
        let listen_address = config
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new()
            .route("/alexa", post(alexa::alexa_handler))
            .with_state(skill)
            .route("/check", post(check::check_handler));

        if config.health.enabled {
            app = app.route(&config.health.path, get(health::health_handler));
        }

        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Replace the listen address, e.g. from a command line override
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
