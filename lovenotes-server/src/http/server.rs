//! Axum server setup
//!
//! One process serves exactly one [`Service`]: persistent notes, in-memory
//! notes, or persistent love predictions.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::repos::DbError;
use crate::db::schema;
use crate::store::{MemoryNoteStore, NoteStore, PgNoteStore, PgPredictionStore, PredictionStore};

const NOTES_GREETING: &str = "Hello from the notes backend!";
const PREDICTIONS_GREETING: &str = "Love Predictor API";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// Allow any origin (default: true). When false only local
    /// frontend dev servers are allowed.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_permissive: true,
        }
    }
}

/// Which API this process serves
#[derive(Clone)]
pub enum Service {
    /// Notes in the `notes` table
    Notes(PgPool),
    /// Notes kept in process memory, lost on restart
    NotesMemory,
    /// Love predictions in the `love_predictions` table
    Predictions(PgPool),
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Notes(_) => "notes",
            Self::NotesMemory => "notes-memory",
            Self::Predictions(_) => "predictions",
        }
    }
}

/// Create the table the service needs, if any.
pub async fn prepare_schema(service: &Service) -> Result<(), DbError> {
    match service {
        Service::Notes(pool) => schema::create_notes_table(pool).await,
        Service::NotesMemory => Ok(()),
        Service::Predictions(pool) => schema::create_predictions_table(pool).await,
    }
}

fn notes_app<S: NoteStore>(store: Arc<S>, with_viewer: bool) -> Router {
    let mut router = routes::root::router(NOTES_GREETING).merge(routes::notes::router::<S>());
    if with_viewer {
        router = router.merge(routes::viewer::notes_router::<S>());
    }
    router.with_state(store)
}

fn predictions_app<S: PredictionStore>(store: Arc<S>) -> Router {
    routes::root::router(PREDICTIONS_GREETING)
        .merge(routes::predictions::router::<S>())
        .merge(routes::viewer::predictions_router::<S>())
        .with_state(store)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:8000"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
                HeaderValue::from_static("http://127.0.0.1:8000"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Build the full router for a service, with CORS and tracing layers.
pub fn build_router(service: Service, config: &ServerConfig) -> Router {
    let app = match service {
        Service::Notes(pool) => notes_app(Arc::new(PgNoteStore::new(pool)), true),
        Service::NotesMemory => notes_app(Arc::new(MemoryNoteStore::new()), false),
        Service::Predictions(pool) => predictions_app(Arc::new(PgPredictionStore::new(pool))),
    };

    app.layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(Service::Notes(pool), ServerConfig::default()).await?;
/// ```
pub async fn run_server(service: Service, config: ServerConfig) -> Result<(), ServerError> {
    prepare_schema(&service).await?;

    let name = service.name();
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    }
    let app = build_router(service, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(service = name, "Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("schema setup failed: {0}")]
    Database(#[from] DbError),
}
