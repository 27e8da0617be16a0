//! Writing the sitemap to disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::sitemap::routes::{BASE_URL, DEFAULT_ROUTES};
use crate::sitemap::xml::build_xml;

/// Output location, relative to the working directory.
pub const OUTPUT_PATH: &str = "web/sitemap.xml";

/// Error type for sitemap output.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create missing parent directories, then overwrite `path` with `contents`.
pub fn write_sitemap(path: &Path, contents: &str) -> Result<(), SitemapError> {
    let io_err = |source| SitemapError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "Sitemap written");
    Ok(())
}

/// Render the default route table and write it to `path`.
pub fn generate(path: &Path) -> Result<(), SitemapError> {
    write_sitemap(path, &build_xml(BASE_URL, DEFAULT_ROUTES))
}
