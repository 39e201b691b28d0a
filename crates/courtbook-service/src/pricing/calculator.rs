//! Pure pricing arithmetic.
//!
//! Nothing here touches the database, so the same inputs always give the
//! same price.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use courtbook_core::types::TimeWindow;
use courtbook_entity::pricing::{Adjustment, PricingRule};
use courtbook_entity::resource::{Resource, Tariff};

use crate::error::BookingError;

/// Accumulated effect of every applicable rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFold {
    /// Product of all multiplier values.
    pub multiplier: Decimal,
    /// Sum of all flat fees.
    pub flat_fees: Decimal,
}

impl Default for RuleFold {
    fn default() -> Self {
        Self {
            multiplier: Decimal::ONE,
            flat_fees: Decimal::ZERO,
        }
    }
}

impl RuleFold {
    /// Combine one more adjustment into the fold.
    pub fn apply(self, adjustment: Adjustment) -> Result<Self, BookingError> {
        Ok(match adjustment {
            Adjustment::Multiplier(value) => Self {
                multiplier: self
                    .multiplier
                    .checked_mul(value)
                    .ok_or(BookingError::PriceOverflow)?,
                ..self
            },
            Adjustment::FlatFee(value) => Self {
                flat_fees: self
                    .flat_fees
                    .checked_add(value)
                    .ok_or(BookingError::PriceOverflow)?,
                ..self
            },
        })
    }

    /// Fold every active rule whose conditions hold at `window.start`.
    pub fn from_rules<'a>(
        rules: impl IntoIterator<Item = &'a PricingRule>,
        window: &TimeWindow,
    ) -> Result<Self, BookingError> {
        rules
            .into_iter()
            .filter(|rule| rule.is_active && rule.conditions.matches(window.start))
            .map(PricingRule::adjustment)
            .try_fold(Self::default(), Self::apply)
    }
}

/// How a price was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Catalog cost before rules.
    pub base: Decimal,
    /// Product of applied multipliers.
    pub multiplier: Decimal,
    /// Sum of applied flat fees.
    pub flat_fees: Decimal,
    /// `base × multiplier + flat_fees`, rounded to cents.
    pub total: Decimal,
}

/// Cost contributed by one resource over `window`.
///
/// Hourly resources are charged for fractional hours; per-use resources
/// are charged once per unit regardless of duration.
pub fn line_cost(
    resource: &Resource,
    quantity: i32,
    window: &TimeWindow,
) -> Result<Decimal, BookingError> {
    match resource.tariff() {
        Tariff::Hourly(rate) => rate.checked_mul(hours(window)),
        Tariff::PerUse(price) => price.checked_mul(Decimal::from(quantity)),
    }
    .ok_or(BookingError::PriceOverflow)
}

/// Duration of the window in (possibly fractional) hours.
pub fn hours(window: &TimeWindow) -> Decimal {
    Decimal::from(window.duration_minutes()) / Decimal::from(60)
}

/// Final price of a base cost under a rule fold.
pub fn finalize(base: Decimal, fold: RuleFold) -> Result<PriceBreakdown, BookingError> {
    let total = base
        .checked_mul(fold.multiplier)
        .and_then(|scaled| scaled.checked_add(fold.flat_fees))
        .ok_or(BookingError::PriceOverflow)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(PriceBreakdown {
        base,
        multiplier: fold.multiplier,
        flat_fees: fold.flat_fees,
        total,
    })
}

/// Price a resolved set of resources against a rule set.
///
/// Fails with [`BookingError::PriceOverflow`] when any intermediate amount
/// leaves the `Decimal` range.
pub fn price(
    lines: &[(Resource, i32)],
    rules: &[PricingRule],
    window: &TimeWindow,
) -> Result<PriceBreakdown, BookingError> {
    let base = lines.iter().try_fold(Decimal::ZERO, |sum, (resource, quantity)| {
        sum.checked_add(line_cost(resource, *quantity, window)?)
            .ok_or(BookingError::PriceOverflow)
    })?;
    finalize(base, RuleFold::from_rules(rules, window)?)
}
