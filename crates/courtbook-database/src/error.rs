//! Translation of PostgreSQL failures into [`AppError`].

use courtbook_core::error::{AppError, ErrorKind};

/// SQLSTATE raised when an `EXCLUDE` constraint rejects a row.
pub const EXCLUSION_VIOLATION: &str = "23P01";

/// Message returned when an exclusive resource is already taken.
pub const CONFLICT_MESSAGE: &str =
    "One or more selected resources are already booked for this time slot.";

/// Whether the error is an exclusion-constraint violation.
pub fn is_exclusion_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(EXCLUSION_VIOLATION),
        _ => false,
    }
}

/// Map a sqlx error to a database error carrying `context`.
pub fn db_error(context: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("{context}: {err}"), err)
}

/// Like [`db_error`], but turns overlap violations into a conflict.
pub fn write_error(context: &str, err: sqlx::Error) -> AppError {
    if is_exclusion_violation(&err) {
        return AppError::with_source(ErrorKind::Conflict, CONFLICT_MESSAGE, err);
    }
    db_error(context, err)
}
