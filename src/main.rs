//! Workroom Server, the collaborative workspace backend.
//!
//! Main entry point: loads configuration, initializes logging, connects
//! to the database, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use workroom_core::config::AppConfig;
use workroom_core::error::AppError;
use workroom_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the current environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("WORKROOM_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Connect to the database, run migrations, and start the server
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Workroom v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    workroom_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    workroom_api::run_server(config, db.into_pool()).await
}
