//! Catalog listing commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use courtbook_core::config::AppConfig;
use courtbook_core::error::AppError;
use courtbook_database::repositories::CatalogRepository;
use courtbook_entity::resource::{Coach, Court, Equipment};
use courtbook_service::CatalogService;

use crate::output::{self, OutputFormat};

/// Arguments for catalog commands
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Catalog subcommand
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands
#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List courts, coaches, and equipment
    List,
}

/// Catalog display row
#[derive(Debug, Serialize, Tabled)]
pub struct ResourceRow {
    /// Resource kind
    #[tabled(rename = "type")]
    pub resource_type: String,
    /// Catalog id
    pub id: i64,
    /// Name
    pub name: String,
    /// Rate and unit
    pub price: String,
    /// Pool size, for equipment
    pub quantity: String,
}

impl From<&Court> for ResourceRow {
    fn from(court: &Court) -> Self {
        Self {
            resource_type: "court".into(),
            id: court.id,
            name: court.name.clone(),
            price: format!("{}/h", court.base_price_per_hour),
            quantity: "-".into(),
        }
    }
}

impl From<&Coach> for ResourceRow {
    fn from(coach: &Coach) -> Self {
        Self {
            resource_type: "coach".into(),
            id: coach.id,
            name: coach.name.clone(),
            price: format!("{}/h", coach.hourly_rate),
            quantity: "-".into(),
        }
    }
}

impl From<&Equipment> for ResourceRow {
    fn from(equipment: &Equipment) -> Self {
        Self {
            resource_type: "equipment".into(),
            id: equipment.id,
            name: equipment.name.clone(),
            price: format!("{}/use", equipment.price_per_use),
            quantity: equipment.total_quantity.to_string(),
        }
    }
}

/// Execute catalog commands
pub async fn execute(
    args: &CatalogArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;
    let service = CatalogService::new(Arc::new(CatalogRepository::new(db.pool().clone())));

    match &args.command {
        CatalogCommand::List => {
            let mut rows: Vec<ResourceRow> =
                service.courts().await?.iter().map(ResourceRow::from).collect();
            rows.extend(service.coaches().await?.iter().map(ResourceRow::from));
            rows.extend(service.equipment().await?.iter().map(ResourceRow::from));
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
