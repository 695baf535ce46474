//! pl-library: toy book catalog.
//!
//! A `Library` keeps its books in insertion order and hands out ids by
//! incrementing the id of the last book.

pub mod book;
pub mod database;
pub mod error;
pub mod library;

pub use book::{Book, BookId};
pub use database::{books_from_json, sample_books};
pub use error::{LibraryError, LibraryResult};
pub use library::Library;
