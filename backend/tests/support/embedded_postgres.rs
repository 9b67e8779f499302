//! Database provisioning on the embedded test cluster.
//!
//! Database creation goes through the `postgres` client because
//! `DROP DATABASE` cannot run inside the transaction Diesel would open.
//! Schema setup reuses the crate's embedded migrations so tests never drift
//! from what the server applies at startup.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use student_records::outbound::persistence::migrations;

use super::format_postgres_error;

const MAINTENANCE_DATABASE: &str = "postgres";

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Drop and recreate `name`, returning its connection URL.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url(MAINTENANCE_DATABASE);
    let mut client =
        Client::connect(admin_url.as_str(), NoTls).map_err(|err| format_postgres_error(&err))?;
    let quoted = quote_identifier(name);
    client
        .batch_execute(format!("DROP DATABASE IF EXISTS {quoted}").as_str())
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(format!("CREATE DATABASE {quoted}").as_str())
        .map_err(|err| format_postgres_error(&err))?;
    Ok(cluster.connection().database_url(name))
}

/// Apply every pending migration to the database at `url`.
pub fn migrate_schema(url: &str) -> Result<Vec<String>, String> {
    migrations::run_pending(url).map_err(|err| err.to_string())
}

/// Insert campus rows directly, bypassing the read-only port.
pub fn seed_campuses(url: &str, campuses: &[(i32, Option<&str>)]) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    for (code, description) in campuses {
        client
            .execute(
                "INSERT INTO campuses (code, description) VALUES ($1, $2)",
                &[code, description],
            )
            .map_err(|err| format_postgres_error(&err))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Unit checks for identifier quoting.

    use super::*;

    #[test]
    fn identifiers_are_quoted_and_escaped() {
        assert_eq!(quote_identifier("students_test"), "\"students_test\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
