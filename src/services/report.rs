//! Catalog reports
//!
//! Read-only views over the catalog and its transaction log.

use crate::error::ShelfResult;
use crate::models::{Book, TransactionRecord};

use super::catalog::Catalog;

impl Catalog {
    /// The book borrowed most often; ties go to the earliest-added book
    pub fn most_borrowed(&self) -> Option<&Book> {
        self.books.iter().fold(None, |best: Option<&Book>, book| match best {
            Some(current) if current.borrow_count() >= book.borrow_count() => Some(current),
            _ => Some(book),
        })
    }

    /// Books by `author` (case-insensitive exact match), in catalog order
    pub fn search_by_author(&self, author: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.matches_author(author)).collect()
    }

    /// Every logged transaction line, oldest first
    pub fn transaction_history(&self) -> ShelfResult<Vec<String>> {
        self.storage.transactions.read_lines()
    }

    /// The most recent `limit` transaction lines, oldest first
    pub fn recent_history(&self, limit: usize) -> ShelfResult<Vec<String>> {
        self.storage.transactions.read_recent(limit)
    }

    /// Logged transactions involving one member, oldest first
    pub fn member_history(&self, member_id: &str) -> ShelfResult<Vec<TransactionRecord>> {
        let records = self.storage.transactions.read_records()?;
        Ok(records
            .into_iter()
            .filter(|r| r.member_id == member_id)
            .collect())
    }
}
