//! Per-request database session
//!
//! A `Session` is a transaction checked out of the pool. Dropping it without
//! calling [`Session::commit`] rolls back and hands the connection back to
//! the pool, so every exit path (including `?` and panics) releases it.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use super::repos::DbError;

/// Transactional handle scoped to one request
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Check a connection out of the pool and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await?;
        tracing::debug!("session opened");
        Ok(Self { tx })
    }

    /// Connection to run statements on.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit and release the connection.
    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await?;
        tracing::debug!("session committed");
        Ok(())
    }
}
