//! Shared helpers for the backend integration tests.
//!
//! Integration tests compile as separate crates, so helpers shared between
//! suites live here and are pulled in with `mod support;`.

pub mod cluster_skip;
pub mod embedded_postgres;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{migrate_schema, reset_database, seed_campuses};
pub use pg_embed::test_cluster;

/// Render a `postgres` error with the server message and SQLSTATE.
///
/// `postgres::Error`'s `Display` collapses database errors to `db error`,
/// which is useless in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}
