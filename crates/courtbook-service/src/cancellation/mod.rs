//! Cancellation and waitlist promotion.

pub mod promoter;

pub use promoter::{CancellationOutcome, CancellationService};
