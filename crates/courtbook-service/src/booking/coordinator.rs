//! Atomic booking creation.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use courtbook_core::config::BookingConfig;
use courtbook_core::types::TimeWindow;
use courtbook_database::error::write_error;
use courtbook_database::repositories::BookingRepository;
use courtbook_entity::booking::{Booking, BookingItem, RequestedItem};

use crate::availability::InventoryChecker;
use crate::error::BookingError;
use crate::pricing::PricingEngine;

/// A booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    /// Booking user.
    pub user_name: String,
    /// Window start.
    pub start_time: NaiveDateTime,
    /// Window end (exclusive).
    pub end_time: NaiveDateTime,
    /// Resources to reserve.
    pub items: Vec<RequestedItem>,
}

/// A committed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// New booking id.
    pub booking_id: i64,
    /// Price charged.
    pub total_price: Decimal,
    /// The stored header.
    pub booking: Booking,
    /// The stored items.
    pub items: Vec<BookingItem>,
}

/// Checks, prices, and persists bookings in one transaction.
#[derive(Debug, Clone)]
pub struct BookingCoordinator {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Request limits.
    limits: BookingConfig,
}

impl BookingCoordinator {
    /// Creates a new booking coordinator.
    pub fn new(booking_repo: Arc<BookingRepository>, limits: BookingConfig) -> Self {
        Self {
            booking_repo,
            limits,
        }
    }

    /// Reserve every requested resource for `[start_time, end_time)` or nothing.
    ///
    /// Equipment pools are checked and locked first, then the price is
    /// computed, then the header and items are written. Any failure drops
    /// the transaction, which rolls it back. A court or coach already held
    /// for an overlapping window fails with [`BookingError::Conflict`].
    #[instrument(skip(self, req), fields(user = %req.user_name, items = req.items.len()))]
    pub async fn create_booking(&self, req: NewBooking) -> Result<BookingReceipt, BookingError> {
        let window = self.validate(&req)?;

        let mut tx = self.booking_repo.begin().await?;

        InventoryChecker::check_availability(&mut tx, &req.items, &window).await?;

        let price = PricingEngine::compute_price(&mut tx, &req.items, window.start, window.end)
            .await?;

        let booking =
            BookingRepository::insert_booking(&mut tx, req.user_name.trim(), &window, price.total)
                .await?;

        let mut items = Vec::with_capacity(req.items.len());
        for item in &req.items {
            match BookingRepository::insert_item(&mut tx, booking.id, item, &window).await {
                Ok(row) => items.push(row),
                Err(e) => {
                    warn!(
                        resource_type = %item.resource_type,
                        resource_id = item.resource_id,
                        error = %e,
                        "Booking item rejected"
                    );
                    return Err(e.into());
                }
            }
        }

        tx.commit()
            .await
            .map_err(|e| write_error("Failed to commit booking", e))?;

        info!(
            booking_id = booking.id,
            total_price = %booking.total_price,
            start = %booking.start_time,
            end = %booking.end_time,
            "Booking confirmed"
        );

        Ok(BookingReceipt {
            booking_id: booking.id,
            total_price: booking.total_price,
            booking,
            items,
        })
    }

    /// Check request shape before any storage access.
    fn validate(&self, req: &NewBooking) -> Result<TimeWindow, BookingError> {
        if req.user_name.trim().is_empty() {
            return Err(BookingError::Validation("user_name is required".into()));
        }
        if req.items.is_empty() {
            return Err(BookingError::Validation(
                "At least one item is required".into(),
            ));
        }
        if req.items.len() > self.limits.max_items_per_booking {
            return Err(BookingError::Validation(format!(
                "A booking may hold at most {} items",
                self.limits.max_items_per_booking
            )));
        }
        for item in &req.items {
            let quantity = item.quantity();
            if quantity < 1 || quantity > self.limits.max_quantity_per_item {
                return Err(BookingError::Validation(format!(
                    "quantity for {} {} must be between 1 and {}",
                    item.resource_type, item.resource_id, self.limits.max_quantity_per_item
                )));
            }
        }
        Ok(TimeWindow::new(req.start_time, req.end_time)?)
    }
}
