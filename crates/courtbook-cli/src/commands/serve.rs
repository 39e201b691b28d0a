//! `courtbook-cli serve`

use clap::Args;

use courtbook_core::config::AppConfig;
use courtbook_core::error::AppError;
use courtbook_database::migration;

use crate::output;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen on this port instead of `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Listen on this address instead of `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Start without applying pending migrations
    #[arg(long)]
    pub no_migrate: bool,
}

pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    config.server.port = args.port.unwrap_or(config.server.port);
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }

    let db = super::create_db_pool(&config).await?;
    if args.no_migrate {
        output::print_warning("Skipping migrations.");
    } else {
        migration::run_migrations(db.pool()).await?;
    }

    output::print_success(&format!(
        "Serving CourtBook on {}",
        config.server.bind_address()
    ));
    courtbook_api::run_server(config, db).await
}
