//! Pricing rule rows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use std::fmt;

use super::conditions::RuleConditions;

/// How a matching rule adjusts the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rule_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Scales the base total.
    Multiplier,
    /// Added after scaling.
    FlatFee,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiplier => write!(f, "multiplier"),
            Self::FlatFee => write!(f, "flat_fee"),
        }
    }
}

/// The price adjustment contributed by one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Multiply the base total by this factor.
    Multiplier(Decimal),
    /// Add this amount to the scaled total.
    FlatFee(Decimal),
}

/// A conditional price adjustment managed by administrators.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PricingRule {
    /// Unique rule identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Adjustment kind.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Factor or amount, depending on `kind`.
    pub value: Decimal,
    /// Applicability predicate.
    pub conditions: Json<RuleConditions>,
    /// Only active rules are considered when pricing.
    pub is_active: bool,
    /// When the rule was created.
    pub created_at: DateTime<Utc>,
}

impl PricingRule {
    /// The tagged adjustment this rule contributes when it applies.
    pub fn adjustment(&self) -> Adjustment {
        match self.kind {
            RuleKind::Multiplier => Adjustment::Multiplier(self.value),
            RuleKind::FlatFee => Adjustment::FlatFee(self.value),
        }
    }
}

/// Data required to create a pricing rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePricingRule {
    /// Display name.
    pub name: String,
    /// Adjustment kind.
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Factor or amount.
    pub value: Decimal,
    /// Applicability predicate.
    #[serde(default)]
    pub conditions: RuleConditions,
}
