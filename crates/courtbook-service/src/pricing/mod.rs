//! Price computation: catalog base cost folded with the active rule set.

pub mod calculator;
pub mod engine;

pub use calculator::{PriceBreakdown, RuleFold};
pub use engine::{PriceQuote, PricingEngine};
