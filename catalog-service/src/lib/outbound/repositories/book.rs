use async_trait::async_trait;
use sqlx::PgPool;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::ports::BookRepository;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, isbn, name, author)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(book.id.0)
        .bind(book.isbn.as_str())
        .bind(book.name.as_str())
        .bind(book.author.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(book)
    }
}
