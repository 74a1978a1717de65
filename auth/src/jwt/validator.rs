use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;
use super::secret::SigningSecret;

/// Checks presented tokens and recovers their subject.
///
/// Needs nothing but the signing secret and the clock.
#[derive(Clone)]
pub struct TokenValidator {
    handler: JwtHandler,
}

impl TokenValidator {
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            handler: JwtHandler::new(secret),
        }
    }

    /// Validate a presented token and return its subject.
    ///
    /// Missing, malformed, forged and expired tokens all yield `None`. The
    /// reason is logged at debug level and never surfaced to the caller.
    pub fn validate(&self, token: Option<&str>) -> Option<String> {
        let Some(token) = token else {
            tracing::debug!(reason = "missing", "Token rejected");
            return None;
        };

        match self.decode(token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                tracing::debug!(reason = %e, "Token rejected");
                None
            }
        }
    }

    /// Decode a token, keeping the failure reason.
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }
        if claims.sub.is_empty() {
            return Err(JwtError::MissingClaim("sub".to_string()));
        }

        Ok(claims)
    }
}
