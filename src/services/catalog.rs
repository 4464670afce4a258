//! Catalog service
//!
//! The in-memory collection of books and members, backed by the flat-file
//! storage layer. Every mutating operation persists the full snapshot before
//! returning.

use std::collections::HashSet;

use crate::config::paths::CatalogFiles;
use crate::error::{ShelfError, ShelfResult};
use crate::models::{Book, Member};
use crate::storage::Storage;

/// Result of [`Catalog::add_book`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAdded {
    /// A new catalog entry was created
    Added,
    /// The id was already known; its copy count grew by the incoming copies
    Merged { available_copies: u32 },
}

/// Books, members and the loans between them
///
/// Both collections keep insertion order and are unique by id.
#[derive(Debug)]
pub struct Catalog {
    pub(super) storage: Storage,
    pub(super) books: Vec<Book>,
    pub(super) members: Vec<Member>,
}

impl Catalog {
    /// Open the catalog stored at `files`, creating missing files first
    pub fn open(files: CatalogFiles) -> ShelfResult<Self> {
        let storage = Storage::new(files)?;
        let mut catalog = Self {
            storage,
            books: Vec::new(),
            members: Vec::new(),
        };
        catalog.load()?;
        Ok(catalog)
    }

    /// Replace in-memory state with the on-disk snapshot
    ///
    /// Later lines repeating an id already seen are dropped.
    pub fn load(&mut self) -> ShelfResult<()> {
        let (books, members) = self.storage.load_all()?;

        let mut seen = HashSet::new();
        self.books = books
            .into_iter()
            .filter(|book| {
                let fresh = seen.insert(book.id.clone());
                if !fresh {
                    tracing::warn!(book_id = %book.id, "ignoring duplicate book id on load");
                }
                fresh
            })
            .collect();

        seen.clear();
        self.members = members
            .into_iter()
            .filter(|member| {
                let fresh = seen.insert(member.id.clone());
                if !fresh {
                    tracing::warn!(member_id = %member.id, "ignoring duplicate member id on load");
                }
                fresh
            })
            .collect();

        Ok(())
    }

    /// Write the book and member snapshots
    pub fn save(&self) -> ShelfResult<()> {
        self.storage.save_all(&self.books, &self.members)
    }

    pub fn files(&self) -> &CatalogFiles {
        self.storage.files()
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All members in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Add a book, or grow the stock of an existing id
    ///
    /// When the id is already present, the incoming `available_copies` is
    /// added to the existing count; the incoming title, author and borrow
    /// count are ignored.
    pub fn add_book(&mut self, book: Book) -> ShelfResult<BookAdded> {
        let added = match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => {
                existing.adjust_copies(i64::from(book.available_copies()))?;
                BookAdded::Merged {
                    available_copies: existing.available_copies(),
                }
            }
            None => {
                self.books.push(book);
                BookAdded::Added
            }
        };

        self.save()?;
        Ok(added)
    }

    /// Register a member; returns false if the id is already taken
    pub fn add_member(&mut self, member: Member) -> ShelfResult<bool> {
        if self.find_member_by_id(&member.id).is_some() {
            return Ok(false);
        }

        self.members.push(member);
        self.save()?;
        Ok(true)
    }

    pub fn find_book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// First book whose title matches case-insensitively
    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.matches_title(title))
    }

    pub fn find_member_by_id(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Like [`Catalog::find_member_by_id`], but an unknown id is an error
    pub fn member(&self, id: &str) -> ShelfResult<&Member> {
        self.find_member_by_id(id)
            .ok_or_else(|| ShelfError::member_not_found(id))
    }

    /// Summary line for every book
    pub fn display_all_books(&self) -> Vec<String> {
        self.books.iter().map(Book::display).collect()
    }

    /// Summary line for every member
    pub fn display_all_members(&self) -> Vec<String> {
        self.members.iter().map(Member::display).collect()
    }

    pub(super) fn member_index(&self, id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }

    pub(super) fn book_index_by_title(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|b| b.matches_title(title))
    }
}
