//! `courtbook-cli migrate`

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use courtbook_core::config::AppConfig;
use courtbook_core::error::AppError;
use courtbook_database::migration::{self, MigrationStatus};

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommand,
}

#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply pending migrations
    Run,
    /// Show which migrations are applied
    Status,
}

#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    version: i64,
    description: String,
    applied: bool,
}

impl From<MigrationStatus> for MigrationRow {
    fn from(m: MigrationStatus) -> Self {
        Self {
            version: m.version,
            description: m.description,
            applied: m.applied,
        }
    }
}

pub async fn execute(
    args: &MigrateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;

    let result = match args.command {
        MigrateCommand::Run => migration::run_migrations(db.pool())
            .await
            .map(|()| output::print_success("Migrations applied.")),
        MigrateCommand::Status => migration::migration_status(db.pool()).await.map(|status| {
            let rows: Vec<MigrationRow> = status.into_iter().map(Into::into).collect();
            output::print_list(&rows, format);
        }),
    };

    db.close().await;
    result
}
