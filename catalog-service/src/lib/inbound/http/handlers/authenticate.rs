use std::fmt;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::models::LoginCommand;
use crate::inbound::http::router::AppState;

/// Exchange username and password for a signed token.
///
/// The token is returned in the body and in the `authorization` header.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let session = state
        .auth_service
        .login(LoginCommand {
            username: body.username,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    let token = session.token;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token: token.clone(),
        },
    )
    .with_authorization(token))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}

impl fmt::Debug for AuthenticateRequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateRequestBody")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_debug_redacts_password() {
        let body: AuthenticateRequestBody =
            serde_json::from_str(r#"{"username":"john.doe","password":"JohnDoe123*"}"#).unwrap();

        let printed = format!("{:?}", body);
        assert!(printed.contains("john.doe"));
        assert!(!printed.contains("JohnDoe123*"));
    }
}
