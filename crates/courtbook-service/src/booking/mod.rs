//! Booking creation and booking history.

pub mod coordinator;
pub mod history;

pub use coordinator::{BookingCoordinator, BookingReceipt, NewBooking};
pub use history::BookingHistoryService;
