use std::fmt;

use uuid::Uuid;

use crate::book::errors::BookFieldError;
use crate::book::errors::IsbnError;
use crate::user::errors::IdError;

/// Book entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub isbn: Isbn,
    pub name: BookText,
    pub author: BookText,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// ISBN value type
///
/// Accepts ISBN-10 and ISBN-13 with optional hyphens or spaces. An ISBN-10
/// may end in `X`. The value is kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: String) -> Result<Self, IsbnError> {
        let isbn = isbn.trim().to_string();
        let compact: Vec<char> = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();

        let (last, body) = match compact.split_last() {
            Some(split) => split,
            None => return Err(IsbnError::InvalidLength(0)),
        };

        let body_ok = body.iter().all(|c| c.is_ascii_digit());
        let last_ok = last.is_ascii_digit() || (compact.len() == 10 && matches!(*last, 'X' | 'x'));
        if !body_ok || !last_ok {
            return Err(IsbnError::InvalidCharacters);
        }

        match compact.len() {
            10 | 13 => Ok(Self(isbn)),
            n => Err(IsbnError::InvalidLength(n)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Title or author of a book: non-empty, trimmed, at most 150 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookText(String);

impl BookText {
    const MAX_LENGTH: usize = 150;

    pub fn new(field: &'static str, value: String) -> Result<Self, BookFieldError> {
        let value = value.trim().to_string();
        let length = value.chars().count();

        if length == 0 {
            Err(BookFieldError::Empty { field })
        } else if length > Self::MAX_LENGTH {
            Err(BookFieldError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new book
#[derive(Debug)]
pub struct CreateBookCommand {
    pub isbn: Isbn,
    pub name: BookText,
    pub author: BookText,
}
