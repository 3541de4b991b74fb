//! Post routes — gated ad creation and public listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use super::auth::AuthUser;
use crate::services::post::{self, NewPost, PostRecord};
use crate::services::user;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreatePostBody {
    pub title: String,
    pub description: String,
    /// Opaque string; numeric validation is out of scope.
    pub price: String,
    pub quota: String,
}

/// Store failures on the create path surface as 400 with a fixed message.
fn store_error() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "could not create post" })),
    )
        .into_response()
}

/// `POST /create` — create a post authored by the session user. The author
/// name is re-read from the store and denormalized into the post row.
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreatePostBody>,
) -> Response {
    let author = match user::find_by_id(&state.pool, auth.claims.sub).await {
        Ok(Some(author)) => author,
        Ok(None) => {
            tracing::error!(user_id = %auth.claims.sub, "session user missing from store");
            return store_error();
        }
        Err(e) => {
            tracing::error!(error = %e, "author lookup failed");
            return store_error();
        }
    };

    let new = NewPost {
        title: body.title,
        description: body.description,
        price: body.price,
        quota: body.quota,
        author_id: author.id,
        author: author.name,
    };

    match post::create_post(&state.pool, new).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "post created" }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "post creation failed");
            store_error()
        }
    }
}

/// `GET /post` — list all posts. Public.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostRecord>>, StatusCode> {
    let posts = post::list_posts(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "post listing failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(posts))
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
