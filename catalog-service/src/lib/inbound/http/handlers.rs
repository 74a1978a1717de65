use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::book::errors::BookError;
use crate::domain::authentication::errors::AuthError;
use crate::user::errors::UserError;

pub mod attach_book;
pub mod authenticate;
pub mod create_book;
pub mod create_user;
pub mod healthcheck;

/// Body of every authorization denial.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Body of every failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Username or password not correct";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Successful response: status, JSON body and an optional `authorization`
/// header carrying the caller's token.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq> {
    status: StatusCode,
    data: T,
    authorization: Option<String>,
}

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.data == other.data
            && self.authorization == other.authorization
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data,
            authorization: None,
        }
    }

    /// Repeat the token in the `authorization` response header.
    pub fn with_authorization(mut self, token: impl Into<String>) -> Self {
        self.authorization = Some(token.into());
        self
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let mut response = if self.status == StatusCode::NO_CONTENT {
            self.status.into_response()
        } else {
            (self.status, Json(self.data)).into_response()
        };

        if let Some(token) = self.authorization {
            match HeaderValue::from_str(&token) {
                Ok(value) => {
                    response.headers_mut().insert(AUTHORIZATION, value);
                }
                Err(e) => tracing::error!(error = %e, "Token is not a valid header value"),
            }
        }

        response
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    /// Authorization denied. Always rendered with the same body.
    Unauthorized,
    /// Login denied. Always rendered with the same body.
    InvalidCredentials,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE.to_string()),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ),
        };

        (status, Json(ApiErrorData { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::BookNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest("Username already exists".to_string())
            }
            UserError::BookAlreadyAttached { .. } => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_)
            | UserError::InvalidName(_)
            | UserError::InvalidUserId(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::InvalidBookId(_) | BookError::InvalidIsbn(_) | BookError::InvalidField(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            BookError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::Storage(_) | AuthError::Token(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
