//! Create the table for a persistent service without serving

use anyhow::{bail, Context, Result};
use clap::Parser;

use lovenotes_server::db::{create_pool, schema};
use lovenotes_server::DatabaseConfig;

use super::ServiceKind;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Service whose table should be created
    #[arg(value_enum)]
    pub service: ServiceKind,

    /// Database URL (falls back to the built-in default when unset)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    if !args.service.needs_database() {
        bail!("the notes-memory service has no database table");
    }

    let db = DatabaseConfig::from_var(args.database_url);
    let pool = create_pool(&db.url)
        .await
        .context("Failed to create database pool")?;

    let created = match args.service {
        ServiceKind::Notes => schema::create_notes_table(&pool).await,
        _ => schema::create_predictions_table(&pool).await,
    };
    created.context("Failed to create table")?;

    tracing::info!("Table ready for {:?} service", args.service);
    Ok(())
}
