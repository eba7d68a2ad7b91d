//! lovenotes-server: notes and love prediction HTTP services
//!
//! Each service is a thin axum layer over a store. Persistent stores open
//! one database session per request; the in-memory notes store keeps its
//! records for the life of the process.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod store;

pub use config::DatabaseConfig;
pub use http::{build_router, run_server, ServerConfig, ServerError, Service};
