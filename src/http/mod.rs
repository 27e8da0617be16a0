//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, method check)
//!     → [routing layer picks the stub payload]
//!     → response.rs (JSON encode, content headers)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::{JsonResponse, PayloadBody, StubPayload, JSON_CONTENT_TYPE, SERVICE_NAME};
pub use server::{ApiServer, AppState, ServerError};
