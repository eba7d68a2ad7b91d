//! lovenotes CLI - runs the notes and love prediction HTTP services
//!
//! - `serve notes`        notes API over PostgreSQL
//! - `serve notes-memory` notes API kept in process memory
//! - `serve predictions`  love prediction API over PostgreSQL
//! - `init-db <service>`  create a service's table and exit

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::init_db::{run_init_db, InitDbArgs};
use commands::serve::{run_serve, ServeArgs};
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "lovenotes",
    author,
    version,
    about = "Notes and love prediction HTTP services"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an HTTP service
    Serve(ServeArgs),
    /// Create the table for a persistent service
    InitDb(InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads DATABASE_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).context("Failed to initialize tracing")?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::InitDb(args) => run_init_db(args).await,
    }
}
