//! PostgreSQL pool and schema migrations
//!
//! Only used when the key-value store runs on Postgres. The schema is a
//! single `kv_store` table; see `migrations/`.

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

const MIN_CONNECTIONS: u32 = 1;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&config.url)
        .context("invalid database url")?
        .application_name("fitkro");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(MIN_CONNECTIONS.min(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
        .context("failed to connect to database")?;

    info!(max = config.max_connections, "Database pool created");

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}
