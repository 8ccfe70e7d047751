//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresResultStore` - Write-once JSONB result documents
//! - `lazy_pool` / `run_migrations` - Pool construction and schema bootstrap

mod result_store;

pub use result_store::PostgresResultStore;

use std::str::FromStr;

use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Builds a pool that opens connections on first use.
///
/// The server starts even while the database is down; each request then
/// reports the connection failure itself.
///
/// # Errors
///
/// Returns an error only if the connection URI cannot be parsed.
pub fn lazy_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.url)?.database(&config.name);

    Ok(PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options))
}

/// Applies the bundled migrations (creates the `results` collection).
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
