use std::sync::Arc;
use std::time::Duration;

use auth::AuthenticatedGate;
use auth::Authenticator;
use auth::SubjectGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::attach_book::attach_book;
use super::handlers::authenticate::authenticate;
use super::handlers::create_book::create_book;
use super::handlers::create_user::create_user;
use super::handlers::healthcheck::healthcheck;
use super::middleware::authorize;
use super::middleware::RouteGuard;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    book_service: Arc<dyn BookServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        book_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/healthcheck", get(healthcheck))
        .route("/users", post(create_user))
        .route("/users/authenticate", post(authenticate));

    let authenticated_routes = Router::new()
        .route("/books", post(create_book))
        .route_layer(middleware::from_fn_with_state(
            RouteGuard::new(AuthenticatedGate::new(authenticator.validator())),
            authorize,
        ));

    let subject_routes = Router::new()
        .route("/users/:userId/books/:bookId", post(attach_book))
        .route_layer(middleware::from_fn_with_state(
            RouteGuard::scoped_to(SubjectGate::new(authenticator.validator()), "userId"),
            authorize,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(subject_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
