//! Credential verification: Argon2id hashing and constant-time comparison.

pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
