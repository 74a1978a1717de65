use std::collections::HashMap;
use std::sync::Arc;

use auth::AccessRequest;
use auth::Decision;
use auth::Gate;
use axum::extract::Path;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;

/// Caller identity established by a gate, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject {
    pub subject: String,
    /// Token as presented, without any `Bearer ` prefix.
    pub token: String,
}

/// Gate attached to a group of routes.
///
/// `target_param` names the path parameter holding the subject a
/// subject-scoped gate compares against.
#[derive(Clone)]
pub struct RouteGuard {
    gate: Arc<dyn Gate>,
    target_param: Option<&'static str>,
}

impl RouteGuard {
    pub fn new(gate: impl Gate) -> Self {
        Self {
            gate: Arc::new(gate),
            target_param: None,
        }
    }

    pub fn scoped_to(gate: impl Gate, target_param: &'static str) -> Self {
        Self {
            gate: Arc::new(gate),
            target_param: Some(target_param),
        }
    }
}

/// The one denial every gated route returns.
pub fn unauthorized() -> Response {
    ApiError::Unauthorized.into_response()
}

/// Runs the route's gate before the handler.
///
/// On `Allow` the caller is exposed to the handler as an
/// [`AuthenticatedSubject`] extension. On `Deny` the handler never runs.
pub async fn authorize(
    State(guard): State<RouteGuard>,
    params: Option<Path<HashMap<String, String>>>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = match req.headers().get(AUTHORIZATION).map(|v| v.to_str()) {
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => {
            tracing::debug!("Authorization header is not valid text");
            return unauthorized();
        }
        None => None,
    };

    let target = guard.target_param.and_then(|name| {
        params
            .as_ref()
            .and_then(|Path(params)| params.get(name))
            .map(String::as_str)
    });

    let access = AccessRequest::from_header(header).with_target(target);
    let token = access.token.map(str::to_string);
    let decision = guard.gate.check(&access);

    match (decision, token) {
        (Decision::Allow { subject }, Some(token)) => {
            req.extensions_mut()
                .insert(AuthenticatedSubject { subject, token });
            next.run(req).await
        }
        _ => unauthorized(),
    }
}
