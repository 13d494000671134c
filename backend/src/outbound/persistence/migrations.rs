//! Embedded schema migrations.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Raised when the schema cannot be brought up to date.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database refused the connection.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration script failed.
    #[error("failed to apply migrations: {0}")]
    Apply(String),
}

/// Apply every pending migration.
///
/// Blocking; call from `spawn_blocking` inside async code.
///
/// # Errors
/// [`MigrationError`] when connecting or applying fails.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut connection = PgConnection::establish(database_url)?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|error| MigrationError::Apply(error.to_string()))?;
    info!(count = applied.len(), "database migrations applied");
    Ok(())
}
