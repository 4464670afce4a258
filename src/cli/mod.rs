//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the catalog service.

pub mod book;
pub mod history;
pub mod loan;
pub mod member;

pub use book::{handle_book_command, BookCommands};
pub use history::{handle_history_command, HistoryArgs};
pub use loan::{handle_borrow_command, handle_return_command, LoanArgs};
pub use member::{handle_member_command, MemberCommands};

use crate::error::{ShelfError, ShelfResult};

/// Reject values the line-delimited data files cannot hold
pub(crate) fn validate_field(label: &str, value: &str) -> ShelfResult<()> {
    if value.trim().is_empty() {
        return Err(ShelfError::Validation(format!("{} cannot be empty", label)));
    }
    if value.contains(',') {
        return Err(ShelfError::Validation(format!("{} cannot contain ','", label)));
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(ShelfError::Validation(format!(
            "{} cannot contain line breaks",
            label
        )));
    }
    Ok(())
}

/// Parse a copy count typed by the user
pub(crate) fn parse_copies(input: &str) -> ShelfResult<u32> {
    let copies: i64 = input
        .trim()
        .parse()
        .map_err(|_| ShelfError::Validation("Invalid number for available copies.".into()))?;

    if copies < 0 {
        return Err(ShelfError::Validation(
            "Available copies cannot be negative.".into(),
        ));
    }

    u32::try_from(copies)
        .map_err(|_| ShelfError::Validation("Invalid number for available copies.".into()))
}
