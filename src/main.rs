//! Bitwise Stats - web form service
//!
//! # Routes
//!
//! - `GET /` - Number form
//! - `POST /` - Form submission with result page
//! - `POST /api/numbers` - JSON submission
//! - `GET /health` - Liveness probe

use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bitwise_stats::adapters::postgres::{lazy_pool, run_migrations};
use bitwise_stats::adapters::{app_router, NumbersAppState, PostgresResultStore};
use bitwise_stats::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        service = "bitwise-stats",
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        database = %config.database.name,
        "Configuration loaded"
    );

    let pool = lazy_pool(&config.database)?;
    if config.database.run_migrations {
        // A database that is down at startup is tolerated; requests report it.
        match run_migrations(&pool).await {
            Ok(()) => info!("Migrations applied"),
            Err(e) => warn!(error = %e, "Failed to apply migrations"),
        }
    }

    let state = NumbersAppState::new(Arc::new(PostgresResultStore::new(pool)));
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
