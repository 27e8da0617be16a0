//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from a loaded config
//! - Start the stub API server
//! - Hook OS signals to graceful shutdown

use thiserror::Error;

use crate::config::{ConfigError, ServerConfig};
use crate::http::{ApiServer, ServerError, SERVICE_NAME};
use crate::lifecycle::{signals, Shutdown};
use crate::net::{self, ListenerError};

/// Any error that aborts the server process.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Bind, serve, and block until a shutdown signal arrives.
pub async fn run_with_config(config: ServerConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind_host = %config.bind_host,
        port = config.port,
        "Configuration loaded"
    );

    let listener = net::bind(&config).await?;
    println!("{}", listening_banner(&config));

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::wait_for_shutdown(shutdown));

    ApiServer::new(config).run(listener, server_shutdown).await?;
    Ok(())
}

/// Startup line printed to stdout regardless of the log filter.
pub fn listening_banner(config: &ServerConfig) -> String {
    format!("{SERVICE_NAME} listening on {}", config.listen_url())
}

/// Load config from the environment, then [`run_with_config`].
pub async fn run_from_env() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    run_with_config(config).await
}
