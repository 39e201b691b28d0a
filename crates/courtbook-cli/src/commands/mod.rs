//! CLI command definitions and dispatch.

pub mod catalog;
pub mod migrate;
pub mod quote;
pub mod rules;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use courtbook_core::config::AppConfig;
use courtbook_core::error::AppError;
use courtbook_database::DatabasePool;

use crate::output::OutputFormat;

/// CourtBook: sports facility booking administration
#[derive(Debug, Parser)]
#[command(name = "courtbook", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file. Without it, `config/default.toml` and
    /// the `COURTBOOK_ENV` overlay are used.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Log more (`-v` info, `-vv` debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the CourtBook server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Insert a demo catalog and pricing rules
    Seed,
    /// Catalog listing
    Catalog(catalog::CatalogArgs),
    /// Pricing rule management
    Rules(rules::RulesArgs),
    /// Price a booking without reserving it
    Quote(quote::QuoteArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config, self.format).await,
            Commands::Seed => seed::execute(&config).await,
            Commands::Catalog(args) => catalog::execute(args, &config, self.format).await,
            Commands::Rules(args) => rules::execute(args, &config, self.format).await,
            Commands::Quote(args) => quote::execute(args, &config, self.format).await,
        }
    }
}

/// An explicit file wins; otherwise the layered `config/` directory is read.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    if let Some(path) = config_path {
        return AppConfig::load_file(path);
    }
    let env = std::env::var("COURTBOOK_ENV").unwrap_or_else(|_| "development".into());
    AppConfig::load(&env)
}

pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
