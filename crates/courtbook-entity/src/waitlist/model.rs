//! Waitlist entry rows.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::resource::ResourceType;

/// Status of a waitlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "waitlist_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WaitlistStatus {
    /// Waiting for the slot to free up.
    Pending,
    /// Promoted after a cancellation. Terminal.
    Notified,
}

impl fmt::Display for WaitlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Notified => write!(f, "notified"),
        }
    }
}

/// A user waiting for a resource window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaitlistEntry {
    /// Unique entry identifier.
    pub id: i64,
    /// Waiting user.
    pub user_name: String,
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Catalog id.
    pub resource_id: i64,
    /// Requested window start.
    pub start_time: NaiveDateTime,
    /// Requested window end (exclusive).
    pub end_time: NaiveDateTime,
    /// Current status.
    pub status: WaitlistStatus,
    /// Queue position; earlier entries are promoted first.
    pub created_at: DateTime<Utc>,
}

/// Data required to join the waitlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWaitlistEntry {
    /// Waiting user.
    pub user_name: String,
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Catalog id.
    pub resource_id: i64,
    /// Requested window start.
    pub start_time: NaiveDateTime,
    /// Requested window end (exclusive).
    pub end_time: NaiveDateTime,
}
