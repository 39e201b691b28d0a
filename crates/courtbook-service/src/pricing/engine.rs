//! Pricing engine backed by the catalog and rule tables.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use tracing::debug;

use courtbook_core::types::TimeWindow;
use courtbook_database::error::db_error;
use courtbook_database::repositories::{CatalogRepository, PricingRuleRepository};
use courtbook_entity::booking::RequestedItem;
use courtbook_entity::resource::Resource;

use super::calculator::{self, PriceBreakdown};
use crate::error::BookingError;

/// A read-only price estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Window start.
    pub start_time: NaiveDateTime,
    /// Window end.
    pub end_time: NaiveDateTime,
    /// Catalog cost before rules.
    pub base_price: Decimal,
    /// Product of applied multipliers.
    pub multiplier: Decimal,
    /// Sum of applied flat fees.
    pub flat_fees: Decimal,
    /// Amount a booking would be charged.
    pub total_price: Decimal,
}

/// Computes booking prices from catalog rates and active rules.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    pool: PgPool,
}

impl PricingEngine {
    /// Create a new pricing engine.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Price `items` over `[start, end)` on the caller's connection.
    ///
    /// Run inside the booking transaction so the catalog and rule reads
    /// share its snapshot.
    pub async fn compute_price(
        conn: &mut PgConnection,
        items: &[RequestedItem],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<PriceBreakdown, BookingError> {
        if end <= start {
            return Err(BookingError::InvalidInterval);
        }
        let window = TimeWindow { start, end };

        let lines = Self::resolve(&mut *conn, items).await?;
        let rules = PricingRuleRepository::find_active(&mut *conn).await?;
        let breakdown = calculator::price(&lines, &rules, &window)?;

        debug!(
            items = items.len(),
            rules = rules.len(),
            base = %breakdown.base,
            total = %breakdown.total,
            "Price computed"
        );
        Ok(breakdown)
    }

    /// Price a request without reserving anything.
    pub async fn quote(
        &self,
        items: &[RequestedItem],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<PriceQuote, BookingError> {
        if end <= start {
            return Err(BookingError::InvalidInterval);
        }
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("Failed to acquire connection", e))?;

        let breakdown = Self::compute_price(&mut conn, items, start, end).await?;
        Ok(PriceQuote {
            start_time: start,
            end_time: end,
            base_price: breakdown.base,
            multiplier: breakdown.multiplier,
            flat_fees: breakdown.flat_fees,
            total_price: breakdown.total,
        })
    }

    /// Look up every requested resource in the catalog.
    async fn resolve(
        conn: &mut PgConnection,
        items: &[RequestedItem],
    ) -> Result<Vec<(Resource, i32)>, BookingError> {
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let resource =
                CatalogRepository::find_resource(&mut *conn, item.resource_type, item.resource_id)
                    .await?
                    .ok_or(BookingError::ResourceNotFound {
                        resource_type: item.resource_type,
                        resource_id: item.resource_id,
                    })?;
            lines.push((resource, item.quantity()));
        }
        Ok(lines)
    }
}
