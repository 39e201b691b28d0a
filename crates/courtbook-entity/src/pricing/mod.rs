//! Pricing rule entities.

pub mod conditions;
pub mod rule;

pub use conditions::RuleConditions;
pub use rule::{Adjustment, CreatePricingRule, PricingRule, RuleKind};
