//! Booking header rows.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::item::BookingItemDetail;
use super::status::BookingStatus;

/// A confirmed or cancelled reservation made by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: i64,
    /// Name of the user who booked.
    pub user_name: String,
    /// Window start.
    pub start_time: NaiveDateTime,
    /// Window end (exclusive).
    pub end_time: NaiveDateTime,
    /// Price charged at booking time.
    pub total_price: Decimal,
    /// Current status.
    pub status: BookingStatus,
    /// When the booking was made.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the booking still holds its resources.
    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

/// A booking together with its items, as shown in a user's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingHistoryEntry {
    /// The booking header.
    #[serde(flatten)]
    pub booking: Booking,
    /// Items with their resolved resource names.
    pub items: Vec<BookingItemDetail>,
}
