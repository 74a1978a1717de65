use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by an access token.
///
/// A token names exactly one subject and is valid strictly before `exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// JWT ID, unique per issued token
    pub jti: String,
}

impl Claims {
    /// Create claims for a subject with an absolute expiration.
    ///
    /// # Arguments
    /// * `subject` - Subject identifier to bind the token to
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Validity window starting at `issued_at`
    ///
    /// # Returns
    /// Claims with sub, exp, iat and a fresh jti
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            exp: (issued_at + lifetime).timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
