//! Path management for Shelf
//!
//! Provides XDG-compliant path resolution for configuration and catalog data.
//!
//! ## Path Resolution Order
//!
//! 1. `SHELF_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/shelf` or `~/.config/shelf`
//! 3. Windows: `%APPDATA%\shelf`

use std::path::PathBuf;

use crate::error::ShelfError;

use super::settings::Settings;

/// Locations of the three catalog resources
///
/// Handed to [`crate::catalog::Catalog`] at construction; nothing in the crate
/// reaches for a process-wide file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFiles {
    pub books: PathBuf,
    pub members: PathBuf,
    pub transactions: PathBuf,
}

impl CatalogFiles {
    /// Place all three resources in one directory using the default file names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let settings = Settings::default();
        Self {
            books: dir.join(&settings.books_file),
            members: dir.join(&settings.members_file),
            transactions: dir.join(&settings.transactions_file),
        }
    }

    /// All resource paths, books first
    pub fn all(&self) -> [&PathBuf; 3] {
        [&self.books, &self.members, &self.transactions]
    }
}

/// Manages all paths used by Shelf
#[derive(Debug, Clone)]
pub struct ShelfPaths {
    /// Base directory for all Shelf data
    base_dir: PathBuf,
}

impl ShelfPaths {
    /// Create a new ShelfPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ShelfError> {
        let base_dir = if let Ok(custom) = std::env::var("SHELF_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ShelfPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/shelf/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/shelf/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve the catalog resource locations for the given settings
    pub fn catalog_files(&self, settings: &Settings) -> CatalogFiles {
        let data_dir = self.data_dir();
        CatalogFiles {
            books: data_dir.join(&settings.books_file),
            members: data_dir.join(&settings.members_file),
            transactions: data_dir.join(&settings.transactions_file),
        }
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ShelfError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShelfError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ShelfError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Shelf has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ShelfError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ShelfError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("shelf"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ShelfError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ShelfError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("shelf"))
}
