//! Table definitions, created idempotently when a persistent service starts

use sqlx::PgPool;

use super::repos::DbError;

/// Create the `notes` table if it does not exist
pub async fn create_notes_table(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring notes table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id SERIAL PRIMARY KEY,
            text TEXT NOT NULL,
            created_at TIMESTAMPTZ DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the `love_predictions` table if it does not exist
pub async fn create_predictions_table(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring love_predictions table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS love_predictions (
            id SERIAL PRIMARY KEY,
            boy_name TEXT NOT NULL,
            boy_age INTEGER NOT NULL,
            boy_dob TEXT NOT NULL,
            girl_name TEXT NOT NULL,
            girl_age INTEGER NOT NULL,
            girl_dob TEXT NOT NULL,
            prediction_score INTEGER NOT NULL,
            created_at TIMESTAMPTZ DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
