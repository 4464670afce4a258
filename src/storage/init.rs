//! Storage initialization
//!
//! Handles first-run setup: every catalog resource exists (possibly empty)
//! before anything is loaded.

use crate::config::paths::CatalogFiles;
use crate::error::ShelfError;

use super::file_io::ensure_file;

/// Create any missing catalog file, leaving existing ones untouched
pub fn initialize_storage(files: &CatalogFiles) -> Result<(), ShelfError> {
    for path in files.all() {
        if !path.exists() {
            tracing::debug!(file = %path.display(), "creating empty data file");
        }
        ensure_file(path)?;
    }
    Ok(())
}

/// Check if any catalog file is missing
pub fn needs_initialization(files: &CatalogFiles) -> bool {
    files.all().iter().any(|path| !path.exists())
}
