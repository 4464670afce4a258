//! Book snapshot file
//!
//! One book per line: `book_id,title,author,available_copies,borrow_count`.

use std::path::PathBuf;

use csv::StringRecord;

use crate::error::ShelfError;
use crate::models::Book;

use super::file_io::{parse_count, read_records, write_records_atomic};

/// Reads and rewrites the books file
#[derive(Debug, Clone)]
pub struct BookFile {
    path: PathBuf,
}

impl BookFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all well-formed books in file order
    pub fn load(&self) -> Result<Vec<Book>, ShelfError> {
        let mut books = Vec::new();

        for (index, record) in read_records(&self.path)?.iter().enumerate() {
            match decode(record) {
                Some(book) => books.push(book),
                None => tracing::warn!(
                    file = %self.path.display(),
                    record = index + 1,
                    "skipping malformed book line"
                ),
            }
        }

        Ok(books)
    }

    /// Rewrite the file from the given books
    pub fn save(&self, books: &[Book]) -> Result<(), ShelfError> {
        write_records_atomic(&self.path, books.iter().map(encode))
    }
}

fn encode(book: &Book) -> Vec<String> {
    vec![
        book.id.clone(),
        book.title.clone(),
        book.author.clone(),
        book.available_copies().to_string(),
        book.borrow_count().to_string(),
    ]
}

/// `None` for lines with fewer than five fields or non-integer counts
fn decode(record: &StringRecord) -> Option<Book> {
    if record.len() < 5 {
        return None;
    }

    let copies = parse_count(&record[3])?;
    let borrow_count = parse_count(&record[4])?;

    Some(Book::new(&record[0], &record[1], &record[2], copies).with_borrow_count(borrow_count))
}
