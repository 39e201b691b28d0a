//! Pricing rule administration.

use std::sync::Arc;

use tracing::info;

use courtbook_core::error::AppError;
use courtbook_database::repositories::PricingRuleRepository;
use courtbook_entity::pricing::{CreatePricingRule, PricingRule, RuleKind};

/// Lists, creates, and toggles pricing rules.
#[derive(Debug, Clone)]
pub struct RuleService {
    /// Pricing rule repository.
    rule_repo: Arc<PricingRuleRepository>,
}

impl RuleService {
    /// Creates a new rule service.
    pub fn new(rule_repo: Arc<PricingRuleRepository>) -> Self {
        Self { rule_repo }
    }

    /// Every rule, active or not, by id.
    pub async fn list(&self) -> Result<Vec<PricingRule>, AppError> {
        self.rule_repo.list_all().await
    }

    /// Create a rule after checking its value and conditions.
    pub async fn create(&self, data: CreatePricingRule) -> Result<PricingRule, AppError> {
        validate_rule(&data)?;
        let rule = self.rule_repo.create(&data).await?;
        info!(
            rule_id = rule.id,
            name = %rule.name,
            kind = %rule.kind,
            value = %rule.value,
            "Pricing rule created"
        );
        Ok(rule)
    }

    /// Activate or deactivate a rule.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<(), AppError> {
        if !self.rule_repo.set_active(id, is_active).await? {
            return Err(AppError::not_found(format!("Pricing rule {id} not found")));
        }
        info!(rule_id = id, is_active, "Pricing rule toggled");
        Ok(())
    }
}

fn validate_rule(data: &CreatePricingRule) -> Result<(), AppError> {
    if data.name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    if data.kind == RuleKind::Multiplier && data.value.is_sign_negative() {
        return Err(AppError::validation("multiplier value must not be negative"));
    }
    data.conditions.validate().map_err(AppError::validation)
}
