//! Waitlist repository.

use sqlx::{PgConnection, PgPool};

use courtbook_core::result::AppResult;
use courtbook_entity::booking::ReleasedItem;
use courtbook_entity::waitlist::{CreateWaitlistEntry, WaitlistEntry};

use crate::error::db_error;

/// Repository for waitlist entries.
#[derive(Debug, Clone)]
pub struct WaitlistRepository {
    pool: PgPool,
}

impl WaitlistRepository {
    /// Create a new waitlist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a pending entry.
    pub async fn create(&self, data: &CreateWaitlistEntry) -> AppResult<WaitlistEntry> {
        sqlx::query_as::<_, WaitlistEntry>(
            "INSERT INTO waitlist (user_name, resource_type, resource_id, start_time, end_time) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.user_name)
        .bind(data.resource_type)
        .bind(data.resource_id)
        .bind(data.start_time)
        .bind(data.end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to join waitlist", e))
    }

    /// Entries of one user, oldest first.
    pub async fn find_by_user(&self, user_name: &str) -> AppResult<Vec<WaitlistEntry>> {
        sqlx::query_as::<_, WaitlistEntry>(
            "SELECT * FROM waitlist WHERE user_name = $1 ORDER BY created_at, id",
        )
        .bind(user_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list waitlist entries", e))
    }

    /// Oldest pending entry whose window overlaps a released item.
    ///
    /// The row is locked; entries already locked by a concurrent
    /// cancellation are skipped so two cancellations never promote the
    /// same entry.
    pub async fn next_pending(
        conn: &mut PgConnection,
        released: &ReleasedItem,
    ) -> AppResult<Option<WaitlistEntry>> {
        sqlx::query_as::<_, WaitlistEntry>(
            "SELECT * FROM waitlist \
             WHERE resource_type = $1 AND resource_id = $2 AND status = 'pending' \
             AND tsrange(start_time, end_time, '[)') && tsrange($3, $4, '[)') \
             ORDER BY created_at ASC, id ASC \
             LIMIT 1 \
             FOR UPDATE SKIP LOCKED",
        )
        .bind(released.resource_type)
        .bind(released.resource_id)
        .bind(released.start_time)
        .bind(released.end_time)
        .fetch_optional(conn)
        .await
        .map_err(|e| db_error("Failed to scan waitlist", e))
    }

    /// Mark an entry as promoted and return the updated row.
    pub async fn mark_notified(conn: &mut PgConnection, id: i64) -> AppResult<WaitlistEntry> {
        sqlx::query_as::<_, WaitlistEntry>(
            "UPDATE waitlist SET status = 'notified' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(|e| db_error("Failed to update waitlist entry", e))
    }
}
