//! RentHub server — commercial-premises rental platform backend.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use renthub_core::config::AppConfig;
use renthub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("RENTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging from configuration.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).init();
        }
        _ => {
            fmt().with_env_filter(filter).init();
        }
    }
}

/// Connect to the database, run migrations, and serve.
async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = renthub_database::DatabasePool::connect(&config.database).await?;
    db.health_check().await?;

    renthub_database::migration::run_migrations(db.pool()).await?;

    renthub_api::run_server(config, db.into_pool()).await
}
