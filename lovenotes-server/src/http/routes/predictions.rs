//! Love prediction endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use super::MessageResponse;
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::models::{CreatePredictionRequest, NewPrediction, PredictionResponse};
use crate::store::PredictionStore;

/// GET /predictions - every prediction, unfiltered
async fn list_predictions<S: PredictionStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<PredictionResponse>>, ApiError> {
    let predictions = store.list().await?;
    Ok(Json(
        predictions.into_iter().map(PredictionResponse::from).collect(),
    ))
}

/// POST /predict - score and store a prediction
async fn create_prediction<S: PredictionStore>(
    State(store): State<Arc<S>>,
    Json(req): Json<CreatePredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    // thread_rng is !Send, keep it out of the await
    let new = NewPrediction::score(req, &mut rand::thread_rng());
    let prediction = store.insert(new).await?;

    Ok(Json(PredictionResponse::from(prediction)))
}

/// DELETE /predictions/{id}
async fn delete_prediction<S: PredictionStore>(
    State(store): State<Arc<S>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    store.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Prediction deleted successfully",
    }))
}

/// Prediction routes
pub fn router<S: PredictionStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/predictions", get(list_predictions::<S>))
        .route("/predictions/{id}", delete(delete_prediction::<S>))
        .route("/predict", post(create_prediction::<S>))
}
