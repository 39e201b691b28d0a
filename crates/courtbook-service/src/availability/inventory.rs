//! Equipment inventory accounting.
//!
//! Courts and coaches are not checked here: their overlap rule is an
//! exclusion constraint on `booking_items`, and a clash surfaces when the
//! item row is inserted.

use std::collections::BTreeMap;

use sqlx::PgConnection;
use tracing::{debug, warn};

use courtbook_core::types::TimeWindow;
use courtbook_database::repositories::{BookingRepository, CatalogRepository};
use courtbook_entity::booking::RequestedItem;
use courtbook_entity::resource::ResourceType;

use crate::error::BookingError;

/// Verifies equipment pools can cover a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryChecker;

impl InventoryChecker {
    /// Check every equipment item against its pool.
    ///
    /// Each pool is locked for the rest of the transaction before its usage
    /// is read, in ascending id order. A booking that commits afterwards
    /// therefore cannot have been counted against a stale usage total.
    pub async fn check_availability(
        conn: &mut PgConnection,
        items: &[RequestedItem],
        window: &TimeWindow,
    ) -> Result<(), BookingError> {
        for (equipment_id, requested) in equipment_demand(items) {
            BookingRepository::lock_equipment(&mut *conn, equipment_id).await?;

            let equipment = CatalogRepository::find_equipment(&mut *conn, equipment_id)
                .await?
                .ok_or(BookingError::ResourceNotFound {
                    resource_type: ResourceType::Equipment,
                    resource_id: equipment_id,
                })?;

            let used = BookingRepository::equipment_usage(&mut *conn, equipment_id, window).await?;
            if used + requested > i64::from(equipment.total_quantity) {
                warn!(
                    equipment_id,
                    used,
                    requested,
                    total = equipment.total_quantity,
                    "Insufficient equipment inventory"
                );
                return Err(BookingError::InsufficientInventory {
                    resource_id: equipment_id,
                });
            }

            debug!(equipment_id, used, requested, "Equipment available");
        }
        Ok(())
    }
}

/// Units requested per equipment id, ordered by id.
///
/// Repeated lines for the same pool are summed so they are checked
/// together.
pub fn equipment_demand(items: &[RequestedItem]) -> BTreeMap<i64, i64> {
    let mut demand = BTreeMap::new();
    for item in items
        .iter()
        .filter(|i| i.resource_type == ResourceType::Equipment)
    {
        *demand.entry(item.resource_id).or_insert(0) += i64::from(item.quantity());
    }
    demand
}
