use std::fmt;

use super::errors::JwtError;

/// Recommended minimum secret length for HS256.
const RECOMMENDED_SECRET_LENGTH: usize = 32;

/// Process-wide HMAC signing secret.
///
/// Built once at startup from configuration and never mutated afterwards.
/// There is no default value: an empty secret is rejected so that a service
/// cannot boot signing tokens with a well-known key.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Validate and wrap a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Raw secret bytes (from configuration)
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty or only whitespace
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, JwtError> {
        let secret = secret.as_ref();

        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(JwtError::MissingSecret);
        }

        if secret.len() < RECOMMENDED_SECRET_LENGTH {
            tracing::warn!(
                length = secret.len(),
                recommended = RECOMMENDED_SECRET_LENGTH,
                "Signing secret is shorter than recommended"
            );
        }

        Ok(Self(secret.to_vec()))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}
