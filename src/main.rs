//! kenetg stub API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ net::bind ─▶ http::server ─▶ routing      │
//!                           │                                   │          │
//!     Client Response       │                                   ▼          │
//!     ◀─────────────────────┼── http::response (JSON) ◀── StubPayload     │
//!                           └──────────────────────────────────────────────┘
//! ```
//!
//! Bind address comes from `BACKEND_BIND_HOST` / `BACKEND_PORT`.

use kenetg_backend::lifecycle;
use kenetg_backend::observability;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_logging();

    tracing::info!("kenetg-backend v{} starting", env!("CARGO_PKG_VERSION"));

    lifecycle::run_from_env().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
