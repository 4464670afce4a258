//! Service layer for Shelf
//!
//! The catalog and the operations on it: registration, lookup, the
//! borrow/return protocol and reports.

pub mod catalog;
pub mod loan;
pub mod report;

pub use catalog::{BookAdded, Catalog};
pub use loan::{BorrowOutcome, ReturnOutcome};
