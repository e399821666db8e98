//! Session database migration.
//!
//! # Usage
//!
//! ```bash
//! studio-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `STUDIO_DATABASE_URL` (or `DATABASE_URL`) - `SQLite` URL for the session
//!   store, default `sqlite://studio_sessions.db?mode=rwc`
//!
//! The dashboard also creates the table on startup; this command exists so
//! the database can be prepared ahead of a deploy.

use thiserror::Error;

use studio_pro_admin::config::{AdminConfig, ConfigError};
use studio_pro_admin::db;

/// Errors that can occur during migration.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create the tower-sessions table.
///
/// # Errors
///
/// Returns `MigrationError` if configuration is invalid or the database
/// cannot be reached.
pub async fn session_store() -> Result<(), MigrationError> {
    let config = AdminConfig::from_env()?;

    tracing::info!("Connecting to session database...");
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Creating session table...");
    db::migrate_session_store(&pool).await?;

    tracing::info!("Session store migration complete!");
    Ok(())
}
