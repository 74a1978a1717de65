pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;
pub mod secret;
pub mod validator;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use issuer::TOKEN_LIFETIME_SECONDS;
pub use secret::SigningSecret;
pub use validator::TokenValidator;
