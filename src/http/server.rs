//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the stub handler as fallback
//! - Reject methods other than GET
//! - Serve on a bound listener until shutdown
//!
//! No tracing layer is installed: requests are never logged.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::http::response::StubPayload;
use crate::routing::Router as StubRouter;

/// Error returned when the server stops abnormally.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<StubRouter>,
}

/// HTTP server for the stub API.
pub struct ApiServer {
    router: Router,
    config: ServerConfig,
}

impl ApiServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            router: Arc::new(StubRouter::stub_api()),
        };

        Self {
            router: Self::build_router(state),
            config,
        }
    }

    fn build_router(state: AppState) -> Router {
        Router::new().fallback(stub_handler).with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests complete.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The underlying Axum router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Dispatch a request to its stub payload.
async fn stub_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return StubPayload::unsupported_method().into_response();
    }

    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let payload = *state.router.resolve(target);
    payload.into_response()
}
