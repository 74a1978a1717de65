use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::Session;

/// Port for the login flow.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify a username/password pair and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Storage` - Credential lookup failed
    /// * `Token` - Token could not be signed
    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError>;
}
