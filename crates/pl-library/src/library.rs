//! Ordered book collection with id bookkeeping.

use std::collections::HashSet;

use tracing::debug;

use crate::book::{Book, BookId};
use crate::error::{LibraryError, LibraryResult};

/// Books in insertion order. Ids are unique within one library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library from an initial list of books, keeping their order.
    pub fn with_books(books: Vec<Book>) -> LibraryResult<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id()) {
                return Err(LibraryError::DuplicateId { id: book.id() });
            }
        }
        Ok(Self { books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Id for the next book: 1 for an empty library, otherwise the last book's
    /// id plus one. Gaps left by earlier ids are not reused.
    pub fn get_next_book_id(&self) -> LibraryResult<BookId> {
        match self.books.last() {
            None => Ok(BookId::FIRST),
            Some(last) => last.id().next().ok_or(LibraryError::IdsExhausted),
        }
    }

    /// Position of the book with `id` in insertion order.
    pub fn get_index_by_book_id(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.get_index_by_book_id(id).map(|index| &self.books[index])
    }

    /// Append a book, returning its index.
    pub fn add_book(&mut self, book: Book) -> LibraryResult<usize> {
        if self.get_index_by_book_id(book.id()).is_some() {
            return Err(LibraryError::DuplicateId { id: book.id() });
        }
        debug!(id = %book.id(), name = book.name(), "book added");
        self.books.push(book);
        Ok(self.books.len() - 1)
    }

    /// Create a book under the next free id and append it.
    pub fn create_book(&mut self, name: impl Into<String>, pages: u32) -> LibraryResult<BookId> {
        let id = self.get_next_book_id()?;
        self.add_book(Book::new(id, name, pages)?)?;
        Ok(id)
    }
}
