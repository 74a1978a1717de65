use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::book::errors::BookFieldError;
use crate::book::errors::IsbnError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookText;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Isbn;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

/// Register a book. Runs behind the authenticated gate.
pub async fn create_book(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedSubject>,
    Json(body): Json<CreateBookRequest>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let book = state
        .book_service
        .create_book(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    tracing::debug!(book_id = %book.id, subject = %caller.subject, "Book registered");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&book).into()).with_authorization(caller.token))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    isbn: String,
    name: String,
    author: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBookRequestError {
    #[error("Invalid isbn: {0}")]
    Isbn(#[from] IsbnError),

    #[error(transparent)]
    Field(#[from] BookFieldError),
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, ParseCreateBookRequestError> {
        Ok(CreateBookCommand {
            isbn: Isbn::new(self.isbn)?,
            name: BookText::new("name", self.name)?,
            author: BookText::new("author", self.author)?,
        })
    }
}

impl From<ParseCreateBookRequestError> for ApiError {
    fn from(err: ParseCreateBookRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponseData {
    pub id: String,
    pub isbn: String,
    pub name: String,
    pub author: String,
}

impl From<&Book> for BookResponseData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            isbn: book.isbn.as_str().to_string(),
            name: book.name.as_str().to_string(),
            author: book.author.as_str().to_string(),
        }
    }
}
