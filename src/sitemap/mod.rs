//! Sitemap generation subsystem.
//!
//! # Data Flow
//! ```text
//! DEFAULT_ROUTES (routes.rs, constant)
//!     → xml.rs (render <urlset> document)
//!     → writer.rs (create parent dirs, overwrite file)
//!     → web/sitemap.xml
//! ```
//!
//! # Design Decisions
//! - Output is a pure function of the route table: byte-identical across runs
//! - No partial-write recovery; an I/O failure aborts the run

pub mod routes;
pub mod writer;
pub mod xml;

pub use routes::{ChangeFrequency, Priority, SitemapRoute, BASE_URL, DEFAULT_ROUTES};
pub use writer::{generate, write_sitemap, SitemapError, OUTPUT_PATH};
pub use xml::build_xml;
