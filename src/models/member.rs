//! Member model
//!
//! A patron and the ids of the books they currently hold.

use std::collections::HashSet;
use std::fmt;

use crate::error::ShelfResult;

use super::book::Book;

/// A library member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Borrowed book ids in the order they were borrowed
    borrowed: Vec<String>,

    /// Membership index over `borrowed`, kept in lockstep
    borrowed_index: HashSet<String>,
}

impl Member {
    /// Create a member with no loans
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            borrowed: Vec::new(),
            borrowed_index: HashSet::new(),
        }
    }

    /// Create a member holding the given book ids
    ///
    /// Repeated ids are kept once, at their first position.
    pub fn with_borrowed<I, S>(id: impl Into<String>, name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut member = Self::new(id, name);
        for book_id in ids {
            member.insert_id(book_id.into());
        }
        member
    }

    /// Borrowed book ids, oldest loan first
    pub fn borrowed_ids(&self) -> &[String] {
        &self.borrowed
    }

    pub fn has_borrowed(&self, book_id: &str) -> bool {
        self.borrowed_index.contains(book_id)
    }

    /// Take one copy of `book`
    ///
    /// Returns `Ok(false)` when no copy is on the shelf or this member already
    /// holds the book. Neither the book nor the member change in that case.
    pub fn borrow(&mut self, book: &mut Book) -> ShelfResult<bool> {
        if !book.is_available() || self.has_borrowed(&book.id) {
            return Ok(false);
        }

        book.adjust_copies(-1)?;
        self.insert_id(book.id.clone());
        Ok(true)
    }

    /// Hand back a copy of `book`
    ///
    /// Returns `Ok(false)` when this member does not hold the book.
    pub fn return_book(&mut self, book: &mut Book) -> ShelfResult<bool> {
        if !self.has_borrowed(&book.id) {
            return Ok(false);
        }

        book.adjust_copies(1)?;
        self.remove_id(&book.id);
        Ok(true)
    }

    /// One-line summary for listings
    pub fn display(&self) -> String {
        self.to_string()
    }

    fn insert_id(&mut self, book_id: String) {
        if self.borrowed_index.insert(book_id.clone()) {
            self.borrowed.push(book_id);
        }
    }

    fn remove_id(&mut self, book_id: &str) {
        if self.borrowed_index.remove(book_id) {
            self.borrowed.retain(|id| id != book_id);
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let borrowed = if self.borrowed.is_empty() {
            "None".to_string()
        } else {
            self.borrowed.join(", ")
        };
        write!(
            f,
            "Member ID: {} | Name: {} | Borrowed Book IDs: {}",
            self.id, self.name, borrowed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_then_return_round_trip() {
        let mut member = Member::new("M1", "Alice");
        let mut book = Book::new("B1", "Dune", "Herbert", 2);

        assert!(member.borrow(&mut book).unwrap());
        assert_eq!(book.available_copies(), 1);
        assert_eq!(member.borrowed_ids(), ["B1".to_string()]);

        assert!(member.return_book(&mut book).unwrap());
        assert_eq!(book.available_copies(), 2);
        assert!(member.borrowed_ids().is_empty());
        assert!(!member.has_borrowed("B1"));
    }

    #[test]
    fn test_borrow_twice_rejected_without_change() {
        let mut member = Member::new("M1", "Alice");
        let mut book = Book::new("B1", "Dune", "Herbert", 2);

        assert!(member.borrow(&mut book).unwrap());
        let before = (book.clone(), member.clone());

        assert!(!member.borrow(&mut book).unwrap());
        assert_eq!((book, member), before);
    }

    #[test]
    fn test_borrow_with_no_copies_rejected() {
        let mut member = Member::new("M1", "Alice");
        let mut book = Book::new("B1", "Dune", "Herbert", 0);

        assert!(!member.borrow(&mut book).unwrap());
        assert_eq!(book.available_copies(), 0);
        assert!(member.borrowed_ids().is_empty());
    }

    #[test]
    fn test_return_not_borrowed_rejected() {
        let mut member = Member::new("M1", "Alice");
        let mut book = Book::new("B1", "Dune", "Herbert", 1);

        assert!(!member.return_book(&mut book).unwrap());
        assert_eq!(book.available_copies(), 1);
    }

    #[test]
    fn test_with_borrowed_dedups_and_keeps_order() {
        let member = Member::with_borrowed("M1", "Alice", ["B2", "B1", "B2"]);
        assert_eq!(member.borrowed_ids(), ["B2".to_string(), "B1".to_string()]);
        assert!(member.has_borrowed("B1"));
    }

    #[test]
    fn test_display() {
        let member = Member::new("M1", "Alice");
        assert_eq!(
            member.display(),
            "Member ID: M1 | Name: Alice | Borrowed Book IDs: None"
        );

        let member = Member::with_borrowed("M2", "Bob", ["B1", "B3"]);
        assert_eq!(
            member.to_string(),
            "Member ID: M2 | Name: Bob | Borrowed Book IDs: B1, B3"
        );
    }
}
