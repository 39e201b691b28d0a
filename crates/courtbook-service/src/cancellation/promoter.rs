//! Releases a booking and promotes waiting users into the freed windows.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use courtbook_database::error::db_error;
use courtbook_database::repositories::{BookingRepository, WaitlistRepository};
use courtbook_entity::booking::ReleasedItem;
use courtbook_entity::waitlist::WaitlistEntry;

use crate::error::BookingError;

/// What a cancellation changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationOutcome {
    /// The cancelled booking.
    pub booking_id: i64,
    /// The booking was already cancelled; nothing changed.
    pub already_cancelled: bool,
    /// Windows freed by this cancellation.
    pub released: Vec<ReleasedItem>,
    /// Waitlist entries moved to `notified`.
    pub promoted: Vec<WaitlistEntry>,
}

/// Cancels bookings and serves the waitlist.
#[derive(Debug, Clone)]
pub struct CancellationService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
}

impl CancellationService {
    /// Creates a new cancellation service.
    pub fn new(booking_repo: Arc<BookingRepository>) -> Self {
        Self { booking_repo }
    }

    /// Cancel a booking and promote at most one waiting entry per released item.
    ///
    /// The booking row is locked first, so concurrent cancellations of the
    /// same booking run one after another and the second sees it already
    /// cancelled. Per released item the oldest pending entry with an
    /// overlapping window for the same resource is marked notified.
    #[instrument(skip(self))]
    pub async fn cancel(&self, booking_id: i64) -> Result<CancellationOutcome, BookingError> {
        let mut tx = self.booking_repo.begin().await?;

        let booking = BookingRepository::find_for_update(&mut tx, booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        if !booking.is_confirmed() {
            info!(booking_id, "Booking already cancelled");
            return Ok(CancellationOutcome {
                booking_id,
                already_cancelled: true,
                released: Vec::new(),
                promoted: Vec::new(),
            });
        }

        BookingRepository::mark_cancelled(&mut tx, booking_id).await?;
        let released = BookingRepository::cancel_items(&mut tx, booking_id).await?;

        let mut promoted = Vec::new();
        for item in &released {
            if let Some(pending) = WaitlistRepository::next_pending(&mut tx, item).await? {
                let entry = WaitlistRepository::mark_notified(&mut tx, pending.id).await?;
                info!(
                    waitlist_id = entry.id,
                    user = %entry.user_name,
                    resource_type = %item.resource_type,
                    resource_id = item.resource_id,
                    start = %item.start_time,
                    end = %item.end_time,
                    "Waitlist entry promoted"
                );
                promoted.push(entry);
            }
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit cancellation", e))?;

        info!(
            booking_id,
            released = released.len(),
            promoted = promoted.len(),
            "Booking cancelled"
        );

        Ok(CancellationOutcome {
            booking_id,
            already_cancelled: false,
            released,
            promoted,
        })
    }
}
