//! Auth routes — registration, login, session cookie transport, and the
//! `AuthUser` gate protecting the rest of the API.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::Duration;
use uuid::Uuid;

use crate::services::password;
use crate::services::token::{Claims, TOKEN_TTL_SECS};
use crate::services::user::{self, ApprovalStatus, NewUser, UserRecord};
use crate::state::AppState;

const COOKIE_NAME: &str = "token";

// =============================================================================
// SESSION TRANSPORT
// =============================================================================

/// Build the session cookie carrying a freshly issued token. Max-age stays
/// in lockstep with the token TTL.
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(TOKEN_TTL_SECS))
        .build()
}

/// Build the removal cookie used by logout and invalid-token rejection.
/// Flags must match `session_cookie` exactly or browsers keep the stale
/// cookie.
fn clear_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH GATE
// =============================================================================

/// Authenticated, approved user extracted from the session cookie.
/// Use as a handler parameter to require authorization; there is no other
/// path into protected handlers.
pub struct AuthUser {
    pub claims: Claims,
}

/// Terminal rejection states of the gate.
#[derive(Debug)]
pub enum AuthRejection {
    /// No session cookie on the request.
    NoToken,
    /// Signature, shape, or expiry check failed. The response clears the
    /// stale cookie.
    InvalidToken,
    /// Token verified, but the embedded status is not `active`.
    NotApproved,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::NoToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "no token" })),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::FORBIDDEN,
                CookieJar::new().add(clear_cookie()),
                Json(json!({ "message": "invalid token" })),
            )
                .into_response(),
            Self::NotApproved => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "not approved" })),
            )
                .into_response(),
        }
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(AuthRejection::NoToken);
        }

        let app_state = AppState::from_ref(state);
        let claims = app_state
            .keys
            .verify(token)
            .map_err(|_| AuthRejection::InvalidToken)?;

        if claims.status != ApprovalStatus::Active {
            return Err(AuthRejection::NotApproved);
        }

        Ok(Self { claims })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RegisterBody {
    pub name: String,
    pub email: String,
    pub password: String,
    pub img_url: String,
}

/// Public view of a user row. The password hash is deliberately absent.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub img_url: String,
    pub status: ApprovalStatus,
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            img_url: record.img_url,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "internal server error" })),
    )
        .into_response()
}

fn conflict() -> Response {
    (
        StatusCode::CONFLICT,
        Json(json!({ "message": "user already exists" })),
    )
        .into_response()
}

/// `POST /register` — create an account with status `unapproved`.
///
/// The existence check gives a friendly 409 without burning a bcrypt hash;
/// the store's unique index closes the check-then-create race.
pub async fn register(State(state): State<AppState>, Json(body): Json<RegisterBody>) -> Response {
    let email = user::normalize_email(&body.email);

    match user::find_by_email(&state.pool, &email).await {
        Ok(Some(_)) => return conflict(),
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "duplicate-email check failed");
            return internal_error();
        }
    }

    let password_hash = match password::hash(&body.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "password hashing failed");
            return internal_error();
        }
    };

    let created = user::create_user(
        &state.pool,
        NewUser { name: body.name, email, password_hash, img_url: body.img_url },
    )
    .await;

    match created {
        Ok(record) => (StatusCode::OK, Json(UserResponse::from(record))).into_response(),
        Err(user::UserStoreError::DuplicateEmail) => conflict(),
        Err(e) => {
            tracing::error!(error = %e, "user creation failed");
            internal_error()
        }
    }
}

/// `POST /login` — verify credentials, issue a token, set the session
/// cookie. Approval is not checked here; the gate enforces it per request.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginBody>) -> Response {
    let email = user::normalize_email(&body.email);

    let record = match user::find_by_email(&state.pool, &email).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "user not found" })),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "user lookup failed");
            return internal_error();
        }
    };

    match password::verify(&body.password, &record.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "wrong password" })),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "stored hash rejected by verifier");
            return internal_error();
        }
    }

    let token = match state.keys.issue(&record) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "token signing failed");
            return internal_error();
        }
    };

    let jar = jar.add(session_cookie(token));
    (jar, Json(json!({ "message": "logged in successfully" }))).into_response()
}

/// `GET /check-auth` — report the authenticated identity.
pub async fn check_auth(auth: AuthUser) -> Json<serde_json::Value> {
    Json(json!({ "authenticated": true, "user": auth.claims }))
}

/// `POST /logout` — clear the session cookie. Idempotent; no gate, no
/// session required.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(clear_cookie());
    (jar, Json(json!({ "message": "logged out successfully" })))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
