use thiserror::Error;

/// Error type for JWT operations.
///
/// The variants exist for internal classification and logging. Callers that
/// answer external requests collapse every decoding failure into a single
/// "invalid" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}
