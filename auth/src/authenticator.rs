use crate::jwt::JwtError;
use crate::jwt::SigningSecret;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenValidator;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    /// Computed at construction so the first unknown-user login costs the
    /// same as any other.
    decoy_hash: Option<String>,
    issuer: TokenIssuer,
    validator: TokenValidator,
}

/// Stored credential of a principal, as returned by a credential lookup.
#[derive(Debug, Clone, Copy)]
pub struct Credential<'a> {
    pub subject: &'a str,
    pub password_hash: &'a str,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Subject the token is bound to
    pub subject: String,
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Unknown principal or wrong password. Deliberately does not say which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Validated signing secret, shared by issuer and validator
    pub fn new(secret: &SigningSecret) -> Self {
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher
            .decoy_hash()
            .map_err(|e| tracing::warn!(error = %e, "Decoy hash unavailable"))
            .ok();

        Self {
            password_hasher,
            decoy_hash,
            issuer: TokenIssuer::new(secret),
            validator: TokenValidator::new(secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the credential's subject.
    ///
    /// A missing credential costs one decoy verification so that unknown
    /// principals and wrong passwords take the same time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `credential` - Stored credential found for the presented username
    ///
    /// # Errors
    /// * `InvalidCredentials` - No credential, or password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        credential: Option<Credential<'_>>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let Some(credential) = credential else {
            if let Some(decoy) = &self.decoy_hash {
                self.password_hasher.verify_decoy(password, decoy);
            }
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password, Some(credential.password_hash))
        {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let issued = self.issuer.issue(credential.subject)?;

        Ok(AuthenticationResult {
            subject: issued.subject,
            access_token: issued.token,
        })
    }

    /// Validate a token and return its subject, if any.
    pub fn validate_token(&self, token: Option<&str>) -> Option<String> {
        self.validator.validate(token)
    }

    /// Validator for building authorization gates.
    pub fn validator(&self) -> TokenValidator {
        self.validator.clone()
    }
}
