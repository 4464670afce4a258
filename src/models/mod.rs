//! Core data models for Shelf
//!
//! Books, members and the loan transaction records that link them.

pub mod book;
pub mod member;
pub mod transaction;

pub use book::Book;
pub use member::Member;
pub use transaction::{TransactionAction, TransactionRecord, TIMESTAMP_FORMAT};
