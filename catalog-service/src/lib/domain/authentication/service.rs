use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Credential;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::Session;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::ports::UserRepository;

/// Login orchestration: credential lookup, verification, token issuance.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Look up the stored credential. A username that could never have been
    /// registered is treated like an unknown one.
    async fn lookup(&self, username: String) -> Result<Option<User>, AuthError> {
        let Ok(username) = Username::new(username) else {
            return Ok(None);
        };

        self.repository
            .find_by_username(&username)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError> {
        let user = self.lookup(command.username).await?;

        let stored = user
            .as_ref()
            .map(|u| (u.id.to_string(), u.password_hash.as_str()));
        let credential = stored.as_ref().map(|(subject, hash)| Credential {
            subject,
            password_hash: hash,
        });

        let result = self
            .authenticator
            .authenticate(&command.password, credential)
            .map_err(|e| {
                tracing::debug!(error = %e, "Login rejected");
                AuthError::from(e)
            })?;

        let user_id = UserId::from_string(&result.subject)
            .map_err(|e| AuthError::Token(e.to_string()))?;
        tracing::info!(user_id = %user_id, "User authenticated");

        Ok(Session {
            user_id,
            token: result.access_token,
        })
    }
}
