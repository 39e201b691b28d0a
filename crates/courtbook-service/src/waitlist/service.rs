//! Waitlist join and listing.

use std::sync::Arc;

use tracing::info;

use courtbook_core::error::AppError;
use courtbook_core::types::TimeWindow;
use courtbook_database::repositories::WaitlistRepository;
use courtbook_entity::waitlist::{CreateWaitlistEntry, WaitlistEntry};

/// Queues users for resource windows that are currently taken.
#[derive(Debug, Clone)]
pub struct WaitlistService {
    /// Waitlist repository.
    waitlist_repo: Arc<WaitlistRepository>,
}

impl WaitlistService {
    /// Creates a new waitlist service.
    pub fn new(waitlist_repo: Arc<WaitlistRepository>) -> Self {
        Self { waitlist_repo }
    }

    /// Add a pending entry at the back of the queue.
    pub async fn join(&self, data: CreateWaitlistEntry) -> Result<WaitlistEntry, AppError> {
        if data.user_name.trim().is_empty() {
            return Err(AppError::validation("user_name is required"));
        }
        TimeWindow::new(data.start_time, data.end_time)?;

        let entry = self.waitlist_repo.create(&data).await?;
        info!(
            waitlist_id = entry.id,
            user = %entry.user_name,
            resource_type = %entry.resource_type,
            resource_id = entry.resource_id,
            "Joined waitlist"
        );
        Ok(entry)
    }

    /// Entries of one user, oldest first.
    pub async fn entries_for(&self, user_name: &str) -> Result<Vec<WaitlistEntry>, AppError> {
        self.waitlist_repo.find_by_user(user_name).await
    }
}
