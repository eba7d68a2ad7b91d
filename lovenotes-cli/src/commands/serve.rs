//! HTTP server command
//!
//! Runs one of the lovenotes services until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use lovenotes_server::db::create_pool;
use lovenotes_server::{run_server, DatabaseConfig, ServerConfig, Service};

use super::ServiceKind;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Service to run
    #[arg(value_enum)]
    pub service: ServiceKind,

    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Only allow local frontend origins instead of any origin
    #[arg(long)]
    pub cors_localhost: bool,

    /// Database URL (falls back to the built-in default when unset)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let service = match args.service {
        ServiceKind::NotesMemory => Service::NotesMemory,
        kind => {
            let db = DatabaseConfig::from_var(args.database_url);
            let pool = create_pool(&db.url)
                .await
                .context("Failed to create database pool")?;

            if kind == ServiceKind::Notes {
                Service::Notes(pool)
            } else {
                Service::Predictions(pool)
            }
        }
    };

    tracing::info!("Starting {} service on {}", service.name(), args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: !args.cors_localhost,
    };

    // Blocks until shutdown
    run_server(service, config).await.context("Server error")?;

    Ok(())
}
