//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → router.rs (strip query, ordered lookup)
//!     → matcher.rs (exact or prefix comparison)
//!     → Return: matched stub payload or the not-found payload
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Literal matching only
//! - Deterministic: same input always matches same route
//! - First match wins (table order)

pub mod matcher;
pub mod router;

pub use router::{Route, Router};
