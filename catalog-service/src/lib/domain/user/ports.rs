use async_trait::async_trait;

use crate::domain::book::models::BookId;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, username, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Link a book to a user.
    ///
    /// Authorization happens before this is called; the service only
    /// persists the relation.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `BookNotFound` - Book does not exist
    /// * `BookAlreadyAttached` - Relation already exists
    /// * `DatabaseError` - Database operation failed
    async fn attach_book(&self, user_id: &UserId, book_id: &BookId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// This is the credential lookup used at login. `None` is a normal
    /// outcome; only infrastructure failures are errors.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Check whether a username is already registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError>;

    /// Store the user/book relation.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `BookNotFound` - Book does not exist
    /// * `BookAlreadyAttached` - Relation already exists
    /// * `DatabaseError` - Database operation failed
    async fn attach_book(&self, user_id: &UserId, book_id: &BookId) -> Result<(), UserError>;
}
