//! Post store — ad creation and listing.

use serde::Serialize;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum PostStoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Post row as served to clients. `author` is a name snapshot taken at
/// creation, not a live reference to the user row.
#[derive(Debug, Clone, Serialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: String,
    pub quota: String,
    pub author_id: Uuid,
    pub author: String,
    pub status: String,
    pub created_at: String,
}

/// Fields required to create a post. `price` and `quota` are opaque
/// strings, stored as received.
#[derive(Debug)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub price: String,
    pub quota: String,
    pub author_id: Uuid,
    pub author: String,
}

/// Insert a post with the default `active` status.
///
/// # Errors
///
/// Returns `Db` on database failure.
pub async fn create_post(pool: &PgPool, new: NewPost) -> Result<(), PostStoreError> {
    sqlx::query(
        r"INSERT INTO posts (title, description, price, quota, author_id, author)
          VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.price)
    .bind(&new.quota)
    .bind(new.author_id)
    .bind(&new.author)
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch all posts.
///
/// # Errors
///
/// Returns `Db` on database failure.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<PostRecord>, PostStoreError> {
    let rows = sqlx::query(
        r"SELECT id, title, description, price, quota, author_id, author, status,
                 to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at
          FROM posts",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| PostRecord {
            id: r.get("id"),
            title: r.get("title"),
            description: r.get("description"),
            price: r.get("price"),
            quota: r.get("quota"),
            author_id: r.get("author_id"),
            author: r.get("author"),
            status: r.get("status"),
            created_at: r.get("created_at"),
        })
        .collect())
}
