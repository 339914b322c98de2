//! Shared application state for all routes.

use sqlx::PgPool;

/// Built once at startup; cloned per request (the pool is reference-counted).
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
