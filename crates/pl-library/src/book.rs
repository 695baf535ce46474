use core::fmt;

use pl_core::{ModelError, ModelResult, check_count};
use serde::{Deserialize, Serialize};

/// Catalog identifier of a book.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl BookId {
    pub const FIRST: BookId = BookId(1);

    /// The id after this one, `None` once `u32` is exhausted.
    pub fn next(self) -> Option<BookId> {
        self.0.checked_add(1).map(BookId)
    }
}

impl fmt::Debug for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookId({})", self.0)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book; read-only once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord", into = "BookRecord")]
pub struct Book {
    id: BookId,
    name: String,
    pages: u32,
}

impl Book {
    pub fn new(id: BookId, name: impl Into<String>, pages: u32) -> ModelResult<Self> {
        let pages = check_count(pages, "page count")?;
        Ok(Self {
            id,
            name: name.into(),
            pages,
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book {:?}", self.name)
    }
}

/// Serialized shape of a book; validated on the way in.
#[derive(Serialize, Deserialize)]
struct BookRecord {
    id: BookId,
    name: String,
    pages: u32,
}

impl TryFrom<BookRecord> for Book {
    type Error = ModelError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Book::new(record.id, record.name, record.pages)
    }
}

impl From<Book> for BookRecord {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            pages: book.pages,
        }
    }
}
