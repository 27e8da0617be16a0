//! Observability subsystem.
//!
//! Process-level log events only (startup, shutdown, files written).
//! The HTTP path emits nothing per request.

pub mod logging;

pub use logging::init_logging;
