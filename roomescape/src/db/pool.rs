//! Connection pool construction.
//!
//! The pool is the only resource shared between repository calls. It is built once by the
//! caller from [`DatabaseConfig`] and handed out as connections; repositories never own it.

use crate::config::DatabaseConfig;
use log::LevelFilter;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Open a pool for `config.url`.
///
/// Every statement is logged at debug level through the `log` facade; statements running
/// longer than `slow_statement_threshold` are logged at warn level.
pub async fn connect(config: &DatabaseConfig, slow_statement_threshold: Duration) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, slow_statement_threshold);

    let settings = &config.pool;
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
        .connect_with(options)
        .await?;

    info!(max_connections = settings.max_connections, "Database pool ready");
    Ok(pool)
}
