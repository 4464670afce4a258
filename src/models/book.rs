//! Book model
//!
//! A catalog entry with a mutable available-copy count and a borrow counter.

use std::fmt;

use crate::error::{ShelfError, ShelfResult};

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier
    pub id: String,

    /// Title, matched case-insensitively on lookup
    pub title: String,

    /// Author, matched case-insensitively on search
    pub author: String,

    /// Copies currently on the shelf
    available_copies: u32,

    /// Number of successful borrows, never decreases
    borrow_count: u32,
}

impl Book {
    /// Create a new book that has never been borrowed
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        available_copies: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available_copies,
            borrow_count: 0,
        }
    }

    /// Create a book with an existing borrow history (used when loading)
    pub fn with_borrow_count(mut self, borrow_count: u32) -> Self {
        self.borrow_count = borrow_count;
        self
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    pub fn borrow_count(&self) -> u32 {
        self.borrow_count
    }

    /// Whether at least one copy can be lent out
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Add `delta` to the available copy count
    ///
    /// Fails with [`ShelfError::InvalidOperation`] when the result would be
    /// negative; the count is left untouched in that case.
    pub fn adjust_copies(&mut self, delta: i64) -> ShelfResult<()> {
        let new_value = i64::from(self.available_copies) + delta;
        if new_value < 0 {
            return Err(ShelfError::InvalidOperation(format!(
                "Insufficient copies of '{}' to decrease by {} (available: {})",
                self.id, -delta, self.available_copies
            )));
        }

        self.available_copies = u32::try_from(new_value).map_err(|_| {
            ShelfError::InvalidOperation(format!(
                "Copy count of '{}' would overflow ({})",
                self.id, new_value
            ))
        })?;
        Ok(())
    }

    /// Count one more successful borrow
    pub fn record_borrow(&mut self) {
        self.borrow_count = self.borrow_count.saturating_add(1);
    }

    /// Case-insensitive exact title match
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive exact author match
    pub fn matches_author(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }

    /// One-line summary for listings
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {} | Title: {} | Author: {} | Available: {} | Borrowed: {}",
            self.id, self.title, self.author, self.available_copies, self.borrow_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("B1", "Dune", "Herbert", 2)
    }

    #[test]
    fn test_new_book() {
        let book = dune();
        assert_eq!(book.available_copies(), 2);
        assert_eq!(book.borrow_count(), 0);
        assert!(book.is_available());
    }

    #[test]
    fn test_adjust_copies_up_and_down() {
        let mut book = dune();
        book.adjust_copies(3).unwrap();
        assert_eq!(book.available_copies(), 5);

        book.adjust_copies(-5).unwrap();
        assert_eq!(book.available_copies(), 0);
        assert!(!book.is_available());
    }

    #[test]
    fn test_adjust_copies_below_zero_leaves_state() {
        let mut book = dune();
        let err = book.adjust_copies(-3).unwrap_err();
        assert!(err.is_invalid_operation());
        assert_eq!(book.available_copies(), 2);
    }

    #[test]
    fn test_adjust_copies_overflow_rejected() {
        let mut book = Book::new("B9", "Big", "Author", u32::MAX);
        assert!(book.adjust_copies(1).is_err());
        assert_eq!(book.available_copies(), u32::MAX);
    }

    #[test]
    fn test_record_borrow() {
        let mut book = dune().with_borrow_count(4);
        book.record_borrow();
        assert_eq!(book.borrow_count(), 5);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let book = dune();
        assert!(book.matches_title("DUNE"));
        assert!(!book.matches_title("Dune Messiah"));
        assert!(book.matches_author("herbert"));
    }

    #[test]
    fn test_display() {
        let book = dune().with_borrow_count(1);
        assert_eq!(
            book.display(),
            "Book ID: B1 | Title: Dune | Author: Herbert | Available: 2 | Borrowed: 1"
        );
    }
}
