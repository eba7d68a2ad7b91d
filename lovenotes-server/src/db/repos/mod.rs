//! Repository implementations for database access
//!
//! Each repository borrows a session connection:
//! - insert uses RETURNING so the store-assigned id and timestamp come back
//! - delete reports NotFound when no row matched

pub mod notes;
pub mod predictions;

pub use notes::{Note, NoteRepo};
pub use predictions::{LovePrediction, PredictionRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
