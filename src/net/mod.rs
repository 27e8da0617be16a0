//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig (host, port)
//!     → listener.rs (resolve and bind)
//!     → TcpListener handed to http::ApiServer::run
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
