//! Pricing rule repository.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use courtbook_core::result::AppResult;
use courtbook_entity::pricing::{CreatePricingRule, PricingRule};

use crate::error::db_error;

/// Repository for administrator-managed pricing rules.
#[derive(Debug, Clone)]
pub struct PricingRuleRepository {
    pool: PgPool,
}

impl PricingRuleRepository {
    /// Create a new pricing rule repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every rule, active or not.
    pub async fn list_all(&self) -> AppResult<Vec<PricingRule>> {
        sqlx::query_as::<_, PricingRule>("SELECT * FROM pricing_rules ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list pricing rules", e))
    }

    /// Load the active rules inside a transaction.
    pub async fn find_active(conn: &mut PgConnection) -> AppResult<Vec<PricingRule>> {
        sqlx::query_as::<_, PricingRule>(
            "SELECT * FROM pricing_rules WHERE is_active = TRUE ORDER BY id",
        )
        .fetch_all(conn)
        .await
        .map_err(|e| db_error("Failed to load active pricing rules", e))
    }

    /// Create a rule. New rules start active.
    pub async fn create(&self, data: &CreatePricingRule) -> AppResult<PricingRule> {
        sqlx::query_as::<_, PricingRule>(
            "INSERT INTO pricing_rules (name, type, value, conditions) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.kind)
        .bind(data.value)
        .bind(Json(&data.conditions))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create pricing rule", e))
    }

    /// Toggle a rule. Returns whether the rule exists.
    pub async fn set_active(&self, id: i64, is_active: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE pricing_rules SET is_active = $1 WHERE id = $2")
            .bind(is_active)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update pricing rule", e))?;
        Ok(result.rows_affected() > 0)
    }
}
