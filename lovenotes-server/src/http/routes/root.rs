//! Greeting and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::MessageResponse;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// `GET /` with a per-service greeting, plus `GET /health`
pub fn router<S>(greeting: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(move || async move { Json(MessageResponse { message: greeting }) }),
        )
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_util::send;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_returns_healthy() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let app = router::<()>("Love Predictor API");
        let (status, body) = send(app, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "Love Predictor API"}));
    }
}
