//! Price quote command.

use clap::Args;

use courtbook_core::config::AppConfig;
use courtbook_core::error::AppError;
use courtbook_core::types::parse_timestamp;
use courtbook_entity::booking::RequestedItem;
use courtbook_entity::resource::ResourceType;
use courtbook_service::PricingEngine;

use crate::output::{self, OutputFormat};

/// Arguments for the quote command
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Window start, e.g. `2025-01-04T10:00`
    #[arg(long)]
    pub start: String,
    /// Window end
    #[arg(long)]
    pub end: String,
    /// Court ID
    #[arg(long)]
    pub court: Option<i64>,
    /// Coach ID
    #[arg(long)]
    pub coach: Option<i64>,
    /// Equipment as `ID` or `ID:QUANTITY`; repeatable
    #[arg(long = "equipment")]
    pub equipment: Vec<String>,
}

impl QuoteArgs {
    /// Requested items in booking order.
    fn items(&self) -> Result<Vec<RequestedItem>, AppError> {
        let mut items = Vec::new();
        if let Some(id) = self.court {
            items.push(RequestedItem::new(ResourceType::Court, id));
        }
        if let Some(id) = self.coach {
            items.push(RequestedItem::new(ResourceType::Coach, id));
        }
        for arg in &self.equipment {
            items.push(parse_equipment(arg)?);
        }
        if items.is_empty() {
            return Err(AppError::validation(
                "Pass at least one of --court, --coach, --equipment",
            ));
        }
        Ok(items)
    }
}

fn parse_equipment(arg: &str) -> Result<RequestedItem, AppError> {
    let invalid = || AppError::validation(format!("Invalid equipment '{arg}', expected ID[:QTY]"));
    match arg.split_once(':') {
        Some((id, qty)) => Ok(RequestedItem::with_quantity(
            ResourceType::Equipment,
            id.trim().parse().map_err(|_| invalid())?,
            qty.trim().parse().map_err(|_| invalid())?,
        )),
        None => Ok(RequestedItem::new(
            ResourceType::Equipment,
            arg.trim().parse().map_err(|_| invalid())?,
        )),
    }
}

/// Execute the quote command
pub async fn execute(
    args: &QuoteArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let start = parse_timestamp(&args.start)
        .ok_or_else(|| AppError::validation(format!("Invalid start: {}", args.start)))?;
    let end = parse_timestamp(&args.end)
        .ok_or_else(|| AppError::validation(format!("Invalid end: {}", args.end)))?;
    let items = args.items()?;

    let db = super::create_db_pool(config).await?;
    let engine = PricingEngine::new(db.pool().clone());
    let quote = engine.quote(&items, start, end).await?;

    output::print_item(&quote, format);
    Ok(())
}
