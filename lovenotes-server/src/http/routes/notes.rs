//! Note endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};

use super::MessageResponse;
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::models::{CreateNoteRequest, NoteResponse, NoteText};
use crate::store::NoteStore;

/// GET /notes - every note, unfiltered
async fn list_notes<S: NoteStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = store.list().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// POST /notes - create a note from trimmed text
async fn create_note<S: NoteStore>(
    State(store): State<Arc<S>>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let text = NoteText::new(&req.text)?;
    let note = store.insert(text).await?;

    Ok(Json(NoteResponse::from(note)))
}

/// DELETE /notes/{id}
async fn delete_note<S: NoteStore>(
    State(store): State<Arc<S>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    store.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Note deleted successfully",
    }))
}

/// Note routes
pub fn router<S: NoteStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/notes", get(list_notes::<S>).post(create_note::<S>))
        .route("/notes/{id}", delete(delete_note::<S>))
}
