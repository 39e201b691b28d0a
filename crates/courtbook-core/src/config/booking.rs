//! Booking request limits.

use serde::{Deserialize, Serialize};

/// Limits applied to incoming booking requests before any transaction starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Maximum number of items a single booking may reserve.
    #[serde(default = "default_max_items")]
    pub max_items_per_booking: usize,
    /// Maximum quantity of one equipment item in a single booking.
    #[serde(default = "default_max_quantity")]
    pub max_quantity_per_item: i32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_items_per_booking: default_max_items(),
            max_quantity_per_item: default_max_quantity(),
        }
    }
}

fn default_max_items() -> usize {
    16
}

fn default_max_quantity() -> i32 {
    100
}
