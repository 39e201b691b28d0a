//! Booking domain entities.

pub mod item;
pub mod model;
pub mod request;
pub mod status;

pub use item::{BookingItem, BookingItemDetail, BusySlot, ReleasedItem};
pub use model::{Booking, BookingHistoryEntry};
pub use request::RequestedItem;
pub use status::BookingStatus;
