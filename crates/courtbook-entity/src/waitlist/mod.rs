//! Waitlist entities.

pub mod model;

pub use model::{CreateWaitlistEntry, WaitlistEntry, WaitlistStatus};
