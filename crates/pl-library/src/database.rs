//! Book data supplied as JSON.

use crate::book::Book;
use crate::error::LibraryResult;

const SAMPLE_BOOKS_JSON: &str = r#"[
    { "id": 1, "name": "test_name_1", "pages": 200 },
    { "id": 2, "name": "test_name_2", "pages": 400 }
]"#;

/// Parse a JSON array of `{id, name, pages}` records.
pub fn books_from_json(json: &str) -> LibraryResult<Vec<Book>> {
    Ok(serde_json::from_str(json)?)
}

/// The two-book sample catalog used by the demos.
pub fn sample_books() -> LibraryResult<Vec<Book>> {
    books_from_json(SAMPLE_BOOKS_JSON)
}
