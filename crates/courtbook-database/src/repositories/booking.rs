//! Booking and booking item repository.

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tracing::debug;

use courtbook_core::result::AppResult;
use courtbook_core::types::TimeWindow;
use courtbook_entity::booking::{
    Booking, BookingItem, BookingItemDetail, BusySlot, ReleasedItem, RequestedItem,
};
use courtbook_entity::resource::ResourceType;

use crate::error::{db_error, write_error};

/// Repository for bookings and the items they hold.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Start a transaction on the underlying pool.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))
    }

    /// Take the transaction-scoped lock guarding one equipment pool.
    ///
    /// Held until commit or rollback, so concurrent bookings of the same
    /// equipment read its usage one after another.
    pub async fn lock_equipment(conn: &mut PgConnection, equipment_id: i64) -> AppResult<()> {
        sqlx::query(
            "SELECT pg_advisory_xact_lock(hashtextextended('courtbook.equipment:' || $1::text, 0))",
        )
        .bind(equipment_id)
        .execute(conn)
        .await
        .map_err(|e| db_error("Failed to lock equipment", e))?;
        debug!(equipment_id, "Equipment lock acquired");
        Ok(())
    }

    /// Units of an equipment pool held by confirmed items overlapping `window`.
    pub async fn equipment_usage(
        conn: &mut PgConnection,
        equipment_id: i64,
        window: &TimeWindow,
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM booking_items \
             WHERE resource_type = 'equipment' AND resource_id = $1 AND status = 'confirmed' \
             AND tsrange(start_time, end_time, '[)') && tsrange($2, $3, '[)')",
        )
        .bind(equipment_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_one(conn)
        .await
        .map_err(|e| db_error("Failed to compute equipment usage", e))
    }

    /// Insert a confirmed booking header.
    pub async fn insert_booking(
        conn: &mut PgConnection,
        user_name: &str,
        window: &TimeWindow,
        total_price: Decimal,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_name, start_time, end_time, total_price, status) \
             VALUES ($1, $2, $3, $4, 'confirmed') RETURNING *",
        )
        .bind(user_name)
        .bind(window.start)
        .bind(window.end)
        .bind(total_price)
        .fetch_one(conn)
        .await
        .map_err(|e| db_error("Failed to insert booking", e))
    }

    /// Insert a confirmed item. Overlapping court or coach items fail with a
    /// conflict error.
    pub async fn insert_item(
        conn: &mut PgConnection,
        booking_id: i64,
        item: &RequestedItem,
        window: &TimeWindow,
    ) -> AppResult<BookingItem> {
        sqlx::query_as::<_, BookingItem>(
            "INSERT INTO booking_items \
             (booking_id, resource_type, resource_id, quantity, start_time, end_time, status) \
             VALUES ($1, $2, $3, $4, $5, $6, 'confirmed') RETURNING *",
        )
        .bind(booking_id)
        .bind(item.resource_type)
        .bind(item.resource_id)
        .bind(item.quantity())
        .bind(window.start)
        .bind(window.end)
        .fetch_one(conn)
        .await
        .map_err(|e| write_error("Failed to insert booking item", e))
    }

    /// Load and row-lock a booking inside a transaction.
    pub async fn find_for_update(conn: &mut PgConnection, id: i64) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| db_error("Failed to lock booking", e))
    }

    /// Mark a booking header cancelled.
    pub async fn mark_cancelled(conn: &mut PgConnection, id: i64) -> AppResult<()> {
        sqlx::query("UPDATE bookings SET status = 'cancelled' WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| db_error("Failed to cancel booking", e))?;
        Ok(())
    }

    /// Cancel every confirmed item of a booking, returning the freed windows.
    pub async fn cancel_items(
        conn: &mut PgConnection,
        booking_id: i64,
    ) -> AppResult<Vec<ReleasedItem>> {
        sqlx::query_as::<_, ReleasedItem>(
            "UPDATE booking_items SET status = 'cancelled' \
             WHERE booking_id = $1 AND status = 'confirmed' \
             RETURNING resource_type, resource_id, start_time, end_time",
        )
        .bind(booking_id)
        .fetch_all(conn)
        .await
        .map_err(|e| db_error("Failed to cancel booking items", e))
    }

    /// Confirmed items overlapping `window`, optionally for one resource.
    pub async fn busy_slots(
        &self,
        window: &TimeWindow,
        resource: Option<(ResourceType, i64)>,
    ) -> AppResult<Vec<BusySlot>> {
        let base = "SELECT start_time, end_time, resource_type, resource_id FROM booking_items \
                    WHERE status = 'confirmed' \
                    AND tsrange(start_time, end_time, '[)') && tsrange($1, $2, '[)')";

        let query = match resource {
            Some((resource_type, resource_id)) => sqlx::query_as::<_, BusySlot>(&format!(
                "{base} AND resource_type = $3 AND resource_id = $4 ORDER BY start_time"
            ))
            .bind(window.start)
            .bind(window.end)
            .bind(resource_type)
            .bind(resource_id)
            .fetch_all(&self.pool)
            .await,
            None => sqlx::query_as::<_, BusySlot>(&format!("{base} ORDER BY start_time"))
                .bind(window.start)
                .bind(window.end)
                .fetch_all(&self.pool)
                .await,
        };

        query.map_err(|e| db_error("Failed to list busy slots", e))
    }

    /// All bookings of a user, newest start first.
    pub async fn find_by_user(&self, user_name: &str) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_name = $1 ORDER BY start_time DESC, id DESC",
        )
        .bind(user_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find user bookings", e))
    }

    /// Items of the given bookings with their catalog names resolved.
    pub async fn find_item_details(&self, booking_ids: &[i64]) -> AppResult<Vec<BookingItemDetail>> {
        if booking_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, BookingItemDetail>(
            "SELECT bi.*, COALESCE(c.name, ch.name, e.name) AS resource_name \
             FROM booking_items bi \
             LEFT JOIN courts c ON bi.resource_type = 'court' AND bi.resource_id = c.id \
             LEFT JOIN coaches ch ON bi.resource_type = 'coach' AND bi.resource_id = ch.id \
             LEFT JOIN equipment e ON bi.resource_type = 'equipment' AND bi.resource_id = e.id \
             WHERE bi.booking_id = ANY($1) \
             ORDER BY bi.booking_id, bi.id",
        )
        .bind(booking_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load booking item details", e))
    }
}
