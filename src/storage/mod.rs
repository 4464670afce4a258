//! Storage layer for Shelf
//!
//! Flat text files, one record per line. Books and members are rewritten as
//! full snapshots (temp file + rename); transactions are only ever appended.

pub mod books;
pub mod file_io;
pub mod init;
pub mod members;
pub mod transactions;

pub use books::BookFile;
pub use file_io::{read_records, write_records_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use members::MemberFile;
pub use transactions::TransactionLog;

use crate::config::paths::CatalogFiles;
use crate::error::ShelfError;
use crate::models::{Book, Member};

/// Storage coordinator for the three catalog resources
#[derive(Debug, Clone)]
pub struct Storage {
    files: CatalogFiles,
    pub books: BookFile,
    pub members: MemberFile,
    pub transactions: TransactionLog,
}

impl Storage {
    /// Create a Storage instance, creating any missing file
    pub fn new(files: CatalogFiles) -> Result<Self, ShelfError> {
        initialize_storage(&files)?;

        Ok(Self {
            books: BookFile::new(files.books.clone()),
            members: MemberFile::new(files.members.clone()),
            transactions: TransactionLog::new(files.transactions.clone()),
            files,
        })
    }

    /// Get the file locations
    pub fn files(&self) -> &CatalogFiles {
        &self.files
    }

    /// Load the book and member snapshots
    pub fn load_all(&self) -> Result<(Vec<Book>, Vec<Member>), ShelfError> {
        let books = self.books.load()?;
        let members = self.members.load()?;
        tracing::debug!(books = books.len(), members = members.len(), "catalog loaded");
        Ok((books, members))
    }

    /// Rewrite the book and member snapshots
    pub fn save_all(&self, books: &[Book], members: &[Member]) -> Result<(), ShelfError> {
        self.books.save(books)?;
        self.members.save(members)?;
        tracing::debug!(books = books.len(), members = members.len(), "catalog saved");
        Ok(())
    }
}
