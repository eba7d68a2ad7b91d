//! Database configuration
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: PostgreSQL connection string
//!   (default: postgresql://postgres:@host.docker.internal:5432/notes_app)

/// Connection string used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "postgresql://postgres:@host.docker.internal:5432/notes_app";

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_var(std::env::var("DATABASE_URL").ok())
    }

    /// Use an explicit URL when given, else the hardcoded fallback
    pub fn from_var(url: Option<String>) -> Self {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        Self { url }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_var(None)
    }
}
