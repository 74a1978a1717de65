//! Authentication and authorization library
//!
//! Provides the request-independent core of the catalog service:
//! - Credential verification (Argon2id)
//! - Stateless JWT issuance and validation
//! - Authorization gates deciding allow/deny per request
//! - Login coordination
//!
//! Services own their credential lookups and HTTP shaping and adapt these
//! pieces at their boundary.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", Some(&hash)));
//! assert!(!hasher.verify("my_password", None));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{SigningSecret, TokenIssuer, TokenValidator};
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let issued = TokenIssuer::new(&secret).issue("user123").unwrap();
//! let subject = TokenValidator::new(&secret).validate(Some(&issued.token));
//! assert_eq!(subject.as_deref(), Some("user123"));
//! ```
//!
//! ## Gating a request
//! ```
//! use auth::{AccessRequest, Authenticator, Decision, Gate, SigningSecret, SubjectGate};
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&secret);
//!
//! let hash = auth.hash_password("password123").unwrap();
//! let credential = auth::Credential { subject: "user123", password_hash: &hash };
//! let result = auth.authenticate("password123", Some(credential)).unwrap();
//!
//! let header = format!("Bearer {}", result.access_token);
//! let gate = SubjectGate::new(auth.validator());
//! let request = AccessRequest::from_header(Some(&header)).with_target(Some("user123"));
//! assert!(gate.check(&request).is_allowed());
//!
//! let request = AccessRequest::from_header(Some(&header)).with_target(Some("user456"));
//! assert_eq!(gate.check(&request), Decision::Deny);
//! ```

pub mod authenticator;
pub mod gate;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::Credential;
pub use gate::bearer_token;
pub use gate::AccessRequest;
pub use gate::AuthenticatedGate;
pub use gate::Decision;
pub use gate::Gate;
pub use gate::SubjectGate;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SigningSecret;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
