//! Loan transaction records
//!
//! One record per completed borrow or return, in the order they happened.

use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

use super::book::Book;

/// Timestamp layout used in the transaction log
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What happened to the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionAction {
    Borrow,
    Return,
}

impl TransactionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Borrow => "BORROW",
            Self::Return => "RETURN",
        }
    }
}

impl fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BORROW" => Ok(Self::Borrow),
            "RETURN" => Ok(Self::Return),
            other => Err(format!("Unknown transaction action: {}", other)),
        }
    }
}

/// A single borrow or return event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Local wall-clock time, second precision
    pub timestamp: NaiveDateTime,
    pub action: TransactionAction,
    pub member_id: String,
    pub book_id: String,
    /// Title at the time of the event
    pub book_title: String,
}

impl TransactionRecord {
    /// Record an event happening now
    pub fn now(action: TransactionAction, member_id: impl Into<String>, book: &Book) -> Self {
        let now = Local::now().naive_local();
        Self {
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            action,
            member_id: member_id.into(),
            book_id: book.id.clone(),
            book_title: book.title.clone(),
        }
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.formatted_timestamp(),
            self.action,
            self.member_id,
            self.book_id,
            self.book_title
        )
    }
}
