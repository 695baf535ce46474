use thiserror::Error;

use crate::validate::Bound;

pub type ModelResult<T> = Result<T, ModelError>;

/// Broad category of a model error.
///
/// `Type` covers arguments that are not usable numbers at all (NaN, infinities),
/// `Value` covers well-formed arguments outside their allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid type for {what}: expected {expected}")]
    InvalidType {
        what: &'static str,
        expected: &'static str,
    },

    #[error("Value out of range for {what}: {value} (must be {bound})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        bound: Bound,
    },

    #[error("Invalid value for {what}: {reason}")]
    InvalidValue {
        what: &'static str,
        reason: &'static str,
    },
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::InvalidType { .. } => ErrorKind::Type,
            ModelError::OutOfRange { .. } | ModelError::InvalidValue { .. } => ErrorKind::Value,
        }
    }
}
