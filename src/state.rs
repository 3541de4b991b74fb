//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and the token signing keys. Both are built once
//! in `main` and never mutated afterwards; there is no ambient global
//! configuration.

use sqlx::PgPool;

use crate::services::token::TokenKeys;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub keys: TokenKeys,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, keys: TokenKeys) -> Self {
        Self { pool, keys }
    }
}
