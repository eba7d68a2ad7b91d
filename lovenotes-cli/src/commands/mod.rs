//! Command implementations

pub mod init_db;
pub mod serve;

use clap::ValueEnum;

/// Service variant selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    /// Notes API backed by PostgreSQL
    Notes,
    /// Notes API kept in memory (no database)
    NotesMemory,
    /// Love prediction API backed by PostgreSQL
    Predictions,
}

impl ServiceKind {
    pub fn needs_database(self) -> bool {
        !matches!(self, Self::NotesMemory)
    }
}
