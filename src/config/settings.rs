//! User settings for Shelf
//!
//! Stores the catalog file names and front-end preferences in `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::ShelfPaths;
use crate::error::ShelfError;

/// User settings for Shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Books snapshot file name, relative to the data directory
    #[serde(default = "default_books_file")]
    pub books_file: String,

    /// Members snapshot file name, relative to the data directory
    #[serde(default = "default_members_file")]
    pub members_file: String,

    /// Transaction log file name, relative to the data directory
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,

    /// Default number of entries shown by `shelf history` (0 = all)
    #[serde(default)]
    pub history_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_books_file() -> String {
    "books.txt".to_string()
}

fn default_members_file() -> String {
    "members.txt".to_string()
}

fn default_transactions_file() -> String {
    "transactions.txt".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            books_file: default_books_file(),
            members_file: default_members_file(),
            transactions_file: default_transactions_file(),
            history_limit: 0,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ShelfPaths) -> Result<Self, ShelfError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ShelfError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ShelfError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ShelfPaths) -> Result<(), ShelfError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ShelfError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ShelfError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject file names that would collide or escape the data directory
    pub fn validate(&self) -> Result<(), ShelfError> {
        let names = [&self.books_file, &self.members_file, &self.transactions_file];

        for name in names {
            if name.trim().is_empty() {
                return Err(ShelfError::Config("Data file names cannot be empty".into()));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ShelfError::Config(format!(
                    "Data file name must not contain a path separator: {}",
                    name
                )));
            }
        }

        if names[0] == names[1] || names[0] == names[2] || names[1] == names[2] {
            return Err(ShelfError::Config(
                "Books, members and transactions must use distinct files".into(),
            ));
        }

        Ok(())
    }
}
