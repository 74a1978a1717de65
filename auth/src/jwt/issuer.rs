use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;
use super::secret::SigningSecret;

/// Fixed validity window of every access token, in seconds.
pub const TOKEN_LIFETIME_SECONDS: i64 = 60 * 60;

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub subject: String,
}

/// Mints signed, time-bounded tokens bound to a single subject.
///
/// Stateless: issuing twice for the same subject yields two distinct tokens
/// that are both valid until their own expiry.
#[derive(Clone)]
pub struct TokenIssuer {
    handler: JwtHandler,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            lifetime: Duration::seconds(TOKEN_LIFETIME_SECONDS),
        }
    }

    /// Issue a token for `subject`, valid for [`TOKEN_LIFETIME_SECONDS`] from now.
    ///
    /// The subject is not checked for existence; callers do that before
    /// issuing.
    ///
    /// # Errors
    /// * `MissingClaim` - Subject is empty
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<IssuedToken, JwtError> {
        if subject.is_empty() {
            return Err(JwtError::MissingClaim("sub".to_string()));
        }

        let claims = Claims::for_subject(subject, issued_at, self.lifetime);
        let token = self.handler.encode(&claims)?;

        Ok(IssuedToken {
            token,
            subject: claims.sub,
        })
    }
}
