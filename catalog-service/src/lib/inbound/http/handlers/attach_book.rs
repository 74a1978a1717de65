use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::models::BookId;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

/// Link a book to the user named in the path.
///
/// Runs behind the subject gate, so the caller is that user.
pub async fn attach_book(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedSubject>,
    Path((user_id, book_id)): Path<(String, String)>,
) -> Result<ApiSuccess<()>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let book_id =
        BookId::from_string(&book_id).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .user_service
        .attach_book(&user_id, &book_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::NO_CONTENT, ()).with_authorization(caller.token))
}
