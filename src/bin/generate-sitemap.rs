use std::path::Path;

use kenetg_backend::observability;
use kenetg_backend::sitemap::{self, OUTPUT_PATH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_logging();

    sitemap::generate(Path::new(OUTPUT_PATH))?;

    println!("generated sitemap -> {OUTPUT_PATH}");
    Ok(())
}
