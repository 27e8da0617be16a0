//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables, apply defaults, parse port)
//!     → ServerConfig (validated, immutable)
//!     → passed by value into ApiServer::new
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - Every field has a default, so an empty environment is valid
//! - An unparseable port aborts startup instead of falling back

pub mod loader;
pub mod schema;

pub use loader::{ConfigError, BIND_HOST_VAR, PORT_VAR};
pub use schema::ServerConfig;
