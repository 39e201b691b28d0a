//! Pricing rule commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use courtbook_core::config::AppConfig;
use courtbook_core::error::AppError;
use courtbook_database::repositories::PricingRuleRepository;
use courtbook_entity::pricing::{PricingRule, RuleConditions};
use courtbook_service::RuleService;

use crate::output::{self, OutputFormat};

/// Arguments for rule commands
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Rule subcommand
    #[command(subcommand)]
    pub command: RulesCommand,
}

/// Rule subcommands
#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// List all rules
    List,
    /// Activate or deactivate a rule
    Toggle {
        /// Rule ID
        id: i64,
        /// Deactivate instead of activate
        #[arg(long)]
        off: bool,
    },
}

/// Rule display row
#[derive(Debug, Serialize, Tabled)]
struct RuleRow {
    /// Rule ID
    id: i64,
    /// Name
    name: String,
    /// Kind
    #[tabled(rename = "type")]
    kind: String,
    /// Value
    value: String,
    /// Conditions
    conditions: String,
    /// Active
    active: String,
}

impl From<&PricingRule> for RuleRow {
    fn from(rule: &PricingRule) -> Self {
        Self {
            id: rule.id,
            name: rule.name.clone(),
            kind: rule.kind.to_string(),
            value: rule.value.to_string(),
            conditions: describe(&rule.conditions),
            active: if rule.is_active { "yes" } else { "no" }.to_string(),
        }
    }
}

fn describe(conditions: &RuleConditions) -> String {
    let mut parts = Vec::new();
    if let Some(days) = &conditions.days_of_week {
        let days: Vec<String> = days.iter().map(u32::to_string).collect();
        parts.push(format!("days {}", days.join(",")));
    }
    if let (Some(from), Some(until)) = (conditions.start_hour, conditions.end_hour) {
        parts.push(format!("{from:02}:00-{until:02}:00"));
    }
    if parts.is_empty() {
        "always".to_string()
    } else {
        parts.join("; ")
    }
}

/// Execute rule commands
pub async fn execute(
    args: &RulesArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;
    let service = RuleService::new(Arc::new(PricingRuleRepository::new(db.pool().clone())));

    match &args.command {
        RulesCommand::List => {
            let rules = service.list().await?;
            let rows: Vec<RuleRow> = rules.iter().map(RuleRow::from).collect();
            output::print_list(&rows, format);
        }
        RulesCommand::Toggle { id, off } => {
            service.set_active(*id, !off).await?;
            let state = if *off { "deactivated" } else { "activated" };
            output::print_success(&format!("Rule {id} {state}."));
        }
    }

    Ok(())
}
