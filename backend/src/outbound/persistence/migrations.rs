//! Embedded schema migrations.
//!
//! The SQL under `backend/migrations` is compiled into the binary so the
//! server and the `migrate` tool never depend on files at runtime. Diesel's
//! migration harness is synchronous; async callers should run these helpers
//! on a blocking thread.

use diesel::pg::PgConnection;
use diesel::{Connection, ConnectionError};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations embedded from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying or reverting migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] ConnectionError),
    /// The harness failed while running a migration.
    #[error("migration failed: {message}")]
    Harness {
        /// Harness error text.
        message: String,
    },
}

impl MigrationError {
    fn harness(error: impl std::fmt::Display) -> Self {
        Self::Harness {
            message: error.to_string(),
        }
    }
}

fn connect(database_url: &str) -> Result<PgConnection, MigrationError> {
    Ok(PgConnection::establish(database_url)?)
}

/// Apply every pending migration. Returns the versions applied.
pub fn run_pending(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn = connect(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(MigrationError::harness)?;
    Ok(applied.iter().map(ToString::to_string).collect())
}

/// Revert the most recently applied migration. Returns its version.
pub fn revert_last(database_url: &str) -> Result<String, MigrationError> {
    let mut conn = connect(database_url)?;
    let reverted = conn
        .revert_last_migration(MIGRATIONS)
        .map_err(MigrationError::harness)?;
    Ok(reverted.to_string())
}

/// Revert the latest migration and apply pending ones again.
pub fn redo(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn = connect(database_url)?;
    conn.revert_last_migration(MIGRATIONS)
        .map_err(MigrationError::harness)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(MigrationError::harness)?;
    Ok(applied.iter().map(ToString::to_string).collect())
}
