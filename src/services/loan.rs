//! Borrow and return transactions
//!
//! Each transaction resolves the member, then the book, then applies the
//! member's borrow/return rule. Rejections are ordinary return values; only
//! storage failures and broken invariants surface as errors. A successful
//! transaction appends to the log and rewrites the snapshot before returning.

use std::fmt;

use crate::error::ShelfResult;
use crate::models::{TransactionAction, TransactionRecord};

use super::catalog::Catalog;

/// How a borrow request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    MemberNotFound,
    BookNotFound,
    NoCopies,
    /// The member already holds this book
    AlreadyBorrowed,
    Borrowed,
}

impl BorrowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Borrowed)
    }

    /// Status message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::MemberNotFound => "Member not found.",
            Self::BookNotFound => "Book not found.",
            Self::NoCopies => "No copies available to borrow.",
            Self::AlreadyBorrowed => {
                "Cannot borrow: either unavailable or already borrowed by this member."
            }
            Self::Borrowed => "Book borrowed successfully!",
        }
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// How a return request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    MemberNotFound,
    BookNotFound,
    /// The member does not hold this book
    NotBorrowed,
    Returned,
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Returned)
    }

    /// Status message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::MemberNotFound => "Member not found.",
            Self::BookNotFound => "Book not found.",
            Self::NotBorrowed => "Cannot return: this book is not borrowed by the member.",
            Self::Returned => "Book returned successfully!",
        }
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Catalog {
    /// Lend the first book titled `title` to member `member_id`
    pub fn borrow_transaction(&mut self, member_id: &str, title: &str) -> ShelfResult<BorrowOutcome> {
        let Some(member_idx) = self.member_index(member_id) else {
            return Ok(BorrowOutcome::MemberNotFound);
        };
        let Some(book_idx) = self.book_index_by_title(title) else {
            return Ok(BorrowOutcome::BookNotFound);
        };
        if !self.books[book_idx].is_available() {
            return Ok(BorrowOutcome::NoCopies);
        }

        let member = &mut self.members[member_idx];
        let book = &mut self.books[book_idx];

        if !member.borrow(book)? {
            return Ok(BorrowOutcome::AlreadyBorrowed);
        }
        book.record_borrow();

        let record = TransactionRecord::now(TransactionAction::Borrow, member.id.as_str(), book);
        self.commit(&record)?;

        Ok(BorrowOutcome::Borrowed)
    }

    /// Take back the first book titled `title` from member `member_id`
    pub fn return_transaction(&mut self, member_id: &str, title: &str) -> ShelfResult<ReturnOutcome> {
        let Some(member_idx) = self.member_index(member_id) else {
            return Ok(ReturnOutcome::MemberNotFound);
        };
        let Some(book_idx) = self.book_index_by_title(title) else {
            return Ok(ReturnOutcome::BookNotFound);
        };

        let member = &mut self.members[member_idx];
        let book = &mut self.books[book_idx];

        if !member.return_book(book)? {
            return Ok(ReturnOutcome::NotBorrowed);
        }

        let record = TransactionRecord::now(TransactionAction::Return, member.id.as_str(), book);
        self.commit(&record)?;

        Ok(ReturnOutcome::Returned)
    }

    /// Log the event, then persist the snapshot it belongs to
    fn commit(&self, record: &TransactionRecord) -> ShelfResult<()> {
        self.storage.transactions.append(record)?;
        self.save()?;

        tracing::info!(
            action = %record.action,
            member_id = %record.member_id,
            book_id = %record.book_id,
            "transaction recorded"
        );
        Ok(())
    }
}
