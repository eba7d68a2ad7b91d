//! PostgreSQL-backed stores
//!
//! Every call is one session: begin, run a single repository statement,
//! commit. On error the session is dropped and rolls back.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{NoteStore, PredictionStore};
use crate::db::repos::{DbError, LovePrediction, Note, NoteRepo, PredictionRepo};
use crate::db::Session;
use crate::models::{NewPrediction, NoteText};

/// Notes persisted in the `notes` table
#[derive(Clone)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn insert(&self, text: NoteText) -> Result<Note, DbError> {
        let mut session = Session::begin(&self.pool).await?;
        let note = NoteRepo::new(session.conn()).create(&text).await?;
        session.commit().await?;

        tracing::debug!(id = note.id, "note inserted");
        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>, DbError> {
        let mut session = Session::begin(&self.pool).await?;
        let notes = NoteRepo::new(session.conn()).list().await?;
        session.commit().await?;

        Ok(notes)
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut session = Session::begin(&self.pool).await?;
        NoteRepo::new(session.conn()).delete(id).await?;
        session.commit().await?;

        tracing::debug!(id, "note deleted");
        Ok(())
    }
}

/// Predictions persisted in the `love_predictions` table
#[derive(Clone)]
pub struct PgPredictionStore {
    pool: PgPool,
}

impl PgPredictionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PredictionStore for PgPredictionStore {
    async fn insert(&self, new: NewPrediction) -> Result<LovePrediction, DbError> {
        let mut session = Session::begin(&self.pool).await?;
        let prediction = PredictionRepo::new(session.conn()).create(&new).await?;
        session.commit().await?;

        tracing::debug!(
            id = prediction.id,
            score = prediction.prediction_score,
            "prediction inserted"
        );
        Ok(prediction)
    }

    async fn list(&self) -> Result<Vec<LovePrediction>, DbError> {
        let mut session = Session::begin(&self.pool).await?;
        let predictions = PredictionRepo::new(session.conn()).list().await?;
        session.commit().await?;

        Ok(predictions)
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut session = Session::begin(&self.pool).await?;
        PredictionRepo::new(session.conn()).delete(id).await?;
        session.commit().await?;

        tracing::debug!(id, "prediction deleted");
        Ok(())
    }
}
