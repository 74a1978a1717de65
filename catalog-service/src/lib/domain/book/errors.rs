use thiserror::Error;

use crate::user::errors::IdError;

/// Error for ISBN validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IsbnError {
    #[error("ISBN must have 10 or 13 digits, got {0}")]
    InvalidLength(usize),

    #[error("ISBN contains invalid characters")]
    InvalidCharacters,
}

/// Error for free-text book field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookFieldError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] IdError),

    #[error("Invalid ISBN: {0}")]
    InvalidIsbn(#[from] IsbnError),

    #[error("Invalid book: {0}")]
    InvalidField(#[from] BookFieldError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
