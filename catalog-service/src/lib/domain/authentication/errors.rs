use thiserror::Error;

/// Errors of the login flow.
///
/// `InvalidCredentials` covers both unknown usernames and wrong passwords.
/// Infrastructure faults are kept apart so they are never reported as a
/// failed login.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential lookup failed: {0}")]
    Storage(String),

    #[error("Token issuance failed: {0}")]
    Token(String),
}

impl From<auth::AuthenticationError> for AuthError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            auth::AuthenticationError::JwtError(e) => AuthError::Token(e.to_string()),
        }
    }
}
