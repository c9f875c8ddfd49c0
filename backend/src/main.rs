//! Fit Kro Backend
//!
//! Account, workout, food, weight and coach data for the Fit Kro app,
//! kept in a single key-value store.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: Business rules and aggregation
//! - Repositories: Key layout and typed access to the store
//! - Storage: PostgreSQL `kv_store` table, or an in-memory map for local runs

use anyhow::Result;
use fitkro_backend::{
    config::{self, StorageKind},
    db,
    repositories::{KvStore, MemoryKvStore, PgKvStore},
    routes,
    state::AppState,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        storage = ?config.storage.kind,
        "Starting Fit Kro backend"
    );

    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    let store = connect_store(&config).await?;

    let state = AppState::new(store, config.clone());
    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Open the configured key-value backend
async fn connect_store(config: &config::AppConfig) -> Result<Arc<dyn KvStore>> {
    match config.storage.kind {
        StorageKind::Postgres => {
            info!("Connecting to database...");
            let pool = db::create_pool(&config.database).await?;

            // Production runs migrations as a separate job
            if !config::AppConfig::is_production() {
                info!("Running database migrations...");
                db::run_migrations(&pool).await?;
            }

            Ok(Arc::new(PgKvStore::new(pool)))
        }
        StorageKind::Memory => {
            warn!("Using in-memory storage. Data will be lost on restart.");
            Ok(Arc::new(MemoryKvStore::new()))
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitkro_backend=info,tower_http=info".into()
        } else {
            "fitkro_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    if config.storage.kind == StorageKind::Postgres
        && (config.database.url.contains("localhost") || config.database.url.contains("127.0.0.1"))
    {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    let errors = config.production_errors();
    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
