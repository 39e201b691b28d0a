//! Booking history and calendar reads.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use courtbook_core::error::AppError;
use courtbook_core::types::TimeWindow;
use courtbook_database::repositories::BookingRepository;
use courtbook_entity::booking::{Booking, BookingHistoryEntry, BookingItemDetail, BusySlot};
use courtbook_entity::resource::ResourceType;

/// Read-side queries over bookings.
#[derive(Debug, Clone)]
pub struct BookingHistoryService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
}

impl BookingHistoryService {
    /// Creates a new booking history service.
    pub fn new(booking_repo: Arc<BookingRepository>) -> Self {
        Self { booking_repo }
    }

    /// Bookings of `user_name`, newest start first, each with its items.
    pub async fn history(&self, user_name: &str) -> Result<Vec<BookingHistoryEntry>, AppError> {
        let bookings = self.booking_repo.find_by_user(user_name).await?;
        let ids: Vec<i64> = bookings.iter().map(|b| b.id).collect();
        let details = self.booking_repo.find_item_details(&ids).await?;
        Ok(attach_items(bookings, details))
    }

    /// Confirmed items overlapping the calendar day `date`.
    ///
    /// The resource filter applies only when both parts are given.
    pub async fn busy_slots(
        &self,
        date: NaiveDate,
        resource_type: Option<ResourceType>,
        resource_id: Option<i64>,
    ) -> Result<Vec<BusySlot>, AppError> {
        let filter = resource_type.zip(resource_id);
        self.booking_repo
            .busy_slots(&TimeWindow::for_day(date), filter)
            .await
    }
}

/// Group item rows under their bookings, keeping booking order.
fn attach_items(
    bookings: Vec<Booking>,
    details: Vec<BookingItemDetail>,
) -> Vec<BookingHistoryEntry> {
    let mut by_booking: HashMap<i64, Vec<BookingItemDetail>> = HashMap::new();
    for detail in details {
        by_booking
            .entry(detail.item.booking_id)
            .or_default()
            .push(detail);
    }

    bookings
        .into_iter()
        .map(|booking| {
            let items = by_booking.remove(&booking.id).unwrap_or_default();
            BookingHistoryEntry { booking, items }
        })
        .collect()
}
