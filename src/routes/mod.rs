//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the auth and post endpoints under a single Axum router. CORS is
//! locked to the configured frontend origin with credentials so the
//! session cookie survives cross-origin requests.

pub mod auth;
pub mod posts;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
///
/// With `allowed_origin` set, cross-origin requests are restricted to that
/// origin and credentials (cookies) are allowed. Without it, a permissive
/// no-credentials layer is used for local development.
pub fn app(state: AppState, allowed_origin: Option<HeaderValue>) -> Router {
    let cors = match allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/check-auth", get(auth::check_auth))
        .route("/create", post(posts::create_post))
        .route("/post", get(posts::list_posts))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
