//! Book CLI commands
//!
//! Implements CLI commands for catalog entries.

use clap::Subcommand;

use crate::display::format_lines;
use crate::error::{ShelfError, ShelfResult};
use crate::models::Book;
use crate::services::{BookAdded, Catalog};

use super::{parse_copies, validate_field};

/// Book subcommands
#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a book, or add copies to an existing book id
    Add {
        /// Book ID
        id: String,
        /// Title
        title: String,
        /// Author
        author: String,
        /// Number of copies to put on the shelf
        #[arg(allow_hyphen_values = true)]
        copies: String,
    },
    /// List all books
    List,
    /// Search books by author (case-insensitive exact match)
    Search {
        /// Author name
        #[arg(short, long)]
        author: String,
    },
    /// Show the most borrowed book
    Top,
}

/// Handle a book command
pub fn handle_book_command(catalog: &mut Catalog, cmd: BookCommands) -> ShelfResult<()> {
    match cmd {
        BookCommands::Add {
            id,
            title,
            author,
            copies,
        } => {
            validate_field("Book ID", &id)?;
            validate_field("Title", &title)?;
            validate_field("Author", &author)?;
            if id.contains(';') {
                return Err(ShelfError::Validation(
                    "Book ID cannot contain ';'".into(),
                ));
            }
            let copies = parse_copies(&copies)?;

            match catalog.add_book(Book::new(id.trim(), title.trim(), author.trim(), copies))? {
                BookAdded::Added => println!("Book added successfully!"),
                BookAdded::Merged { available_copies } => println!(
                    "Book ID already exists; added {} copies (now {} available).",
                    copies, available_copies
                ),
            }
        }

        BookCommands::List => {
            print!(
                "{}",
                format_lines(&catalog.display_all_books(), "No books available.")
            );
        }

        BookCommands::Search { author } => {
            let lines: Vec<String> = catalog
                .search_by_author(author.trim())
                .into_iter()
                .map(Book::display)
                .collect();
            print!(
                "{}",
                format_lines(&lines, "No books found for the given author.")
            );
        }

        BookCommands::Top => match catalog.most_borrowed() {
            Some(book) => {
                println!("Most Borrowed Book:");
                println!("{}", book.display());
            }
            None => println!("No books in library."),
        },
    }

    Ok(())
}
