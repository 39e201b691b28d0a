//! Booking domain errors.

use courtbook_core::error::{AppError, ErrorKind};
use courtbook_entity::resource::ResourceType;
use thiserror::Error;

/// Failures raised while pricing, booking, or cancelling.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The request is missing fields or carries bad values.
    #[error("{0}")]
    Validation(String),

    /// The window is empty or inverted.
    #[error("end_time must be after start_time")]
    InvalidInterval,

    /// A requested catalog id does not exist.
    #[error("{resource_type} {resource_id} not found")]
    ResourceNotFound {
        /// Resource kind.
        resource_type: ResourceType,
        /// Unresolved id.
        resource_id: i64,
    },

    /// An exclusive resource is already booked for an overlapping window.
    #[error("{0}")]
    Conflict(String),

    /// An equipment pool cannot cover the requested quantity.
    #[error("Insufficient inventory for equipment ID {resource_id}")]
    InsufficientInventory {
        /// Equipment id.
        resource_id: i64,
    },

    /// Applied rules push the price outside the representable range.
    #[error("Price calculation overflowed")]
    PriceOverflow,

    /// The booking to cancel does not exist.
    #[error("Booking {0} not found")]
    BookingNotFound(i64),

    /// Storage failure.
    #[error(transparent)]
    Database(AppError),
}

impl From<AppError> for BookingError {
    fn from(err: AppError) -> Self {
        match err.kind {
            ErrorKind::Conflict => Self::Conflict(err.message),
            ErrorKind::Validation => Self::Validation(err.message),
            _ => Self::Database(err),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => AppError::validation(msg),
            BookingError::InvalidInterval => AppError::validation(err.to_string()),
            BookingError::Conflict(msg) => AppError::conflict(msg),
            BookingError::Database(inner) => {
                AppError::with_source(ErrorKind::Internal, inner.message.clone(), inner)
            }
            other => AppError::internal(other.to_string()),
        }
    }
}
