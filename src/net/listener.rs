//! TCP listener setup.
//!
//! # Responsibilities
//! - Bind to the configured `host:port`
//! - Report the address that could not be bound

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind a TCP listener for the configured address.
///
/// The host may be a name (e.g. `localhost`); it is resolved by tokio.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ListenerError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(address.as_str())
        .await
        .map_err(|source| ListenerError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::debug!(address = %address, "Listener bound");
    Ok(listener)
}
