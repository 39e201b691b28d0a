//! Response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Bare success flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

impl SuccessResponse {
    /// The only value.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// A human-readable confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Created booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    /// Confirmation text.
    pub message: String,
    /// New booking id.
    pub booking_id: i64,
    /// Price charged.
    pub total_price: Decimal,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Database health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// `"connected"` or `"unreachable"`.
    pub database: String,
}
