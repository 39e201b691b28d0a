//! CourtBook Server: sports facility booking service.
//!
//! Main entry point that loads configuration, connects to PostgreSQL,
//! applies migrations, and serves the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use courtbook_core::config::{AppConfig, LogFormat, LoggingConfig};
use courtbook_core::error::AppError;
use courtbook_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `COURTBOOK_ENV` overlay, and env overrides.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("COURTBOOK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = fmt().with_env_filter(filter).with_target(true);

    match config.format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

/// Connect, migrate, then serve until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting CourtBook");

    let db = DatabasePool::connect(&config.database).await?;

    courtbook_database::migration::run_migrations(db.pool()).await?;

    courtbook_api::run_server(config, db).await
}
