//! Shelf - terminal-based library catalog manager
//!
//! Tracks books, members and borrow/return transactions for a single-user
//! library, persisting everything to flat, comma-separated text files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, catalog file locations and user settings
//! - `error`: Custom error types
//! - `models`: Books, members and transaction records
//! - `storage`: Line-delimited snapshot files and the append-only transaction log
//! - `services`: The catalog and its borrow/return protocol
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `shelf` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf::config::CatalogFiles;
//! use shelf::models::{Book, Member};
//! use shelf::services::Catalog;
//!
//! # fn main() -> Result<(), shelf::ShelfError> {
//! let mut catalog = Catalog::open(CatalogFiles::in_dir("library-data"))?;
//! catalog.add_book(Book::new("B1", "Dune", "Herbert", 2))?;
//! catalog.add_member(Member::new("M1", "Alice"))?;
//!
//! let outcome = catalog.borrow_transaction("M1", "dune")?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ShelfError, ShelfResult};
