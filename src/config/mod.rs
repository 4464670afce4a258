//! Configuration module for Shelf
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Catalog file locations
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{CatalogFiles, ShelfPaths};
pub use settings::Settings;
