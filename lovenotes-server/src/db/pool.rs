//! PostgreSQL pool shared by a persistent service
//!
//! Sessions check connections out of this pool one request at a time and
//! hand them back when dropped.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Upper bound on simultaneously open sessions.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect a pool to the notes or predictions database at `database_url`.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Same as [`create_pool`], with an explicit session limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting database pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
