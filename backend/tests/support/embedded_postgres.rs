//! Database reset and schema setup for a running test cluster.
//!
//! Resets go through `postgres` because `DROP DATABASE` cannot run inside the
//! transaction Diesel would open. The schema comes from the same embedded
//! migrations the server applies at startup.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use song_explorer::outbound::persistence::{MigrationError, run_pending_migrations};

use super::format_postgres_error;

/// Drop and recreate `name` on the cluster.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE); CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))
}

/// Apply every embedded migration to the database at `url`.
pub fn migrate_schema(url: &str) -> Result<(), MigrationError> {
    run_pending_migrations(url)
}
