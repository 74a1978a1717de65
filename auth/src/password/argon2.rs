use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Plaintext used to build the decoy hash. Never matched by a real login.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-users";

/// Credential verifier backed by Argon2id.
///
/// Hashes are stored as opaque PHC strings. Verification is one-way: the
/// plaintext is re-hashed with the stored parameters and the digests are
/// compared in constant time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// An absent or empty hash yields `false` without any comparison. A hash
    /// that cannot be parsed also yields `false`; the caller only ever sees
    /// "matches" or "does not match".
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format, if any
    pub fn verify(&self, password: &str, hash: Option<&str>) -> bool {
        let Some(hash) = hash.filter(|h| !h.is_empty()) else {
            return false;
        };

        match Self::parse(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is unreadable");
                false
            }
        }
    }

    /// Hash the decoy plaintext.
    ///
    /// Callers compute this once up front and pass it to [`verify_decoy`],
    /// so no login pays for the hash itself.
    ///
    /// [`verify_decoy`]: PasswordHasher::verify_decoy
    pub fn decoy_hash(&self) -> Result<String, PasswordError> {
        self.hash(DECOY_PASSWORD)
    }

    /// Burn the cost of one verification against a decoy hash.
    ///
    /// Always returns `false`. Used when no credential exists for a username
    /// so that the response time matches a wrong-password attempt.
    pub fn verify_decoy(&self, password: &str, decoy_hash: &str) -> bool {
        let _ = self.verify(password, Some(decoy_hash));
        false
    }

    fn parse(hash: &str) -> Result<PasswordHash<'_>, PasswordError> {
        PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))
    }
}
