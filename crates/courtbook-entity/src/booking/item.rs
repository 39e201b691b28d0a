//! Booking item rows and projections.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::BookingStatus;
use crate::resource::ResourceType;

/// One resource held by a booking.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingItem {
    /// Unique item identifier.
    pub id: i64,
    /// Owning booking.
    pub booking_id: i64,
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Catalog id of the resource.
    pub resource_id: i64,
    /// Units held (always 1 for courts and coaches).
    pub quantity: i32,
    /// Window start.
    pub start_time: NaiveDateTime,
    /// Window end (exclusive).
    pub end_time: NaiveDateTime,
    /// Mirrors the parent booking.
    pub status: BookingStatus,
}

/// A booking item with the catalog name of its resource.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingItemDetail {
    /// The item itself.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: BookingItem,
    /// Catalog name; `None` when the resource has since been deleted.
    pub resource_name: Option<String>,
}

/// A confirmed, occupied slot as exposed to the booking calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BusySlot {
    /// Slot start.
    pub start_time: NaiveDateTime,
    /// Slot end (exclusive).
    pub end_time: NaiveDateTime,
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Catalog id.
    pub resource_id: i64,
}

/// A resource window freed by a cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ReleasedItem {
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Catalog id.
    pub resource_id: i64,
    /// Released window start.
    pub start_time: NaiveDateTime,
    /// Released window end (exclusive).
    pub end_time: NaiveDateTime,
}
