//! Store contracts shared by every service variant
//!
//! Handlers only see these traits. The persistent variants open one
//! [`Session`](crate::db::Session) per call; the in-memory notes variant
//! keeps its state behind a mutex.

pub mod memory;
pub mod postgres;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::db::repos::{DbError, LovePrediction, Note};
use crate::models::{NewPrediction, NoteText};

pub use memory::MemoryNoteStore;
pub use postgres::{PgNoteStore, PgPredictionStore};

/// Insert/list/delete contract for notes
#[async_trait]
pub trait NoteStore: Send + Sync + 'static {
    async fn insert(&self, text: NoteText) -> Result<Note, DbError>;

    async fn list(&self) -> Result<Vec<Note>, DbError>;

    /// Remove a note. Whether an absent id is an error depends on the store.
    async fn delete(&self, id: i64) -> Result<(), DbError>;
}

/// Insert/list/delete contract for love predictions
#[async_trait]
pub trait PredictionStore: Send + Sync + 'static {
    async fn insert(&self, new: NewPrediction) -> Result<LovePrediction, DbError>;

    async fn list(&self) -> Result<Vec<LovePrediction>, DbError>;

    async fn delete(&self, id: i64) -> Result<(), DbError>;
}
