//! Request and response models
//!
//! Inbound payloads are validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod note;
pub mod prediction;
pub mod validation;

pub use note::{CreateNoteRequest, NoteResponse, NoteText};
pub use prediction::{
    adjust_score, predict_score, raw_score, CreatePredictionRequest, NewPrediction,
    PredictionResponse,
};
pub use validation::ValidationError;
