//! kenetg backend library.
//!
//! Two independent tools share this crate:
//! - the stub JSON API server (`kenetg-backend` binary)
//! - the static sitemap generator (`generate-sitemap` binary)

pub mod config;
pub mod http;
pub mod net;
pub mod routing;
pub mod lifecycle;
pub mod observability;
pub mod sitemap;

pub use config::ServerConfig;
pub use http::ApiServer;
pub use lifecycle::Shutdown;
