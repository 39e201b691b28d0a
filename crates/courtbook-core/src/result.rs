//! Convenience result type alias for CourtBook.

use crate::error::AppError;

/// A specialized `Result` type for CourtBook operations.
pub type AppResult<T> = Result<T, AppError>;
