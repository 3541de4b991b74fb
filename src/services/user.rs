//! Credential store — user persistence and lookup.
//!
//! ARCHITECTURE
//! ============
//! Users are created `unapproved`; the transition to `active` is an
//! operator action against the database, not an API operation. Emails are
//! normalized (trimmed, lowercased) before every store or compare, and the
//! schema's unique index is the real duplicate guard — the handler-level
//! existence check is a best-effort fast path.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Per-user flag gating access to protected operations, distinct from
/// authentication itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Unapproved,
    Active,
}

impl ApprovalStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unapproved => "unapproved",
            Self::Active => "active",
        }
    }

    /// Decode a stored status value. Unknown values decode as `Unapproved`.
    #[must_use]
    pub fn from_str(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            _ => Self::Unapproved,
        }
    }
}

/// User row as stored. `password_hash` never leaves the server; responses
/// are built from the non-credential fields in the routes layer.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub img_url: String,
    pub status: ApprovalStatus,
    pub created_at: String,
}

/// Fields required to create a user. The password arrives already hashed.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub img_url: String,
}

/// Normalize an email for storage and comparison: trim and lowercase.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn record_from_row(row: &PgRow) -> UserRecord {
    UserRecord {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        img_url: row.get("img_url"),
        status: ApprovalStatus::from_str(&row.get::<String, _>("status")),
        created_at: row.get("created_at"),
    }
}

/// Insert a user with the default `unapproved` status and return the row.
///
/// # Errors
///
/// `DuplicateEmail` if the email unique index rejects the insert; `Db` for
/// any other database failure.
pub async fn create_user(pool: &PgPool, new: NewUser) -> Result<UserRecord, UserStoreError> {
    let row = sqlx::query(
        r"INSERT INTO users (name, email, password_hash, img_url)
          VALUES ($1, $2, $3, $4)
          RETURNING id, name, email, password_hash, img_url, status,
                    to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.password_hash)
    .bind(&new.img_url)
    .fetch_one(pool)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => UserStoreError::DuplicateEmail,
        _ => UserStoreError::Db(err),
    })?;

    Ok(record_from_row(&row))
}

/// Look up a user by normalized email.
///
/// # Errors
///
/// Returns `Db` on database failure.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, UserStoreError> {
    let row = sqlx::query(
        r"SELECT id, name, email, password_hash, img_url, status,
                 to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at
          FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(record_from_row))
}

/// Look up a user by id.
///
/// # Errors
///
/// Returns `Db` on database failure.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, UserStoreError> {
    let row = sqlx::query(
        r"SELECT id, name, email, password_hash, img_url, status,
                 to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at
          FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(record_from_row))
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
