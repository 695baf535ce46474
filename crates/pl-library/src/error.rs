//! Error types for catalog operations.

use pl_core::{ErrorKind, ModelError};
use thiserror::Error;

use crate::book::BookId;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Duplicate book id: {id}")]
    DuplicateId { id: BookId },

    #[error("Book id space exhausted")]
    IdsExhausted,

    #[error("Malformed book data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LibraryResult<T> = Result<T, LibraryError>;

impl LibraryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::Model(e) => e.kind(),
            LibraryError::Parse(_) => ErrorKind::Type,
            LibraryError::DuplicateId { .. } | LibraryError::IdsExhausted => ErrorKind::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LibraryError::DuplicateId { id: BookId(7) };
        assert!(err.to_string().contains('7'));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn model_error_keeps_kind() {
        let err: LibraryError = ModelError::InvalidType {
            what: "pages",
            expected: "integer",
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
