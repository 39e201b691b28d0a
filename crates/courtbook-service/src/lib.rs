//! # courtbook-service
//!
//! Booking business logic for CourtBook. Services orchestrate the
//! repositories in `courtbook-database` to price, reserve, and release
//! resources. Every booking and cancellation runs inside one database
//! transaction.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod availability;
pub mod booking;
pub mod cancellation;
pub mod catalog;
pub mod error;
pub mod pricing;
pub mod waitlist;

pub use availability::InventoryChecker;
pub use booking::{BookingCoordinator, BookingHistoryService, BookingReceipt, NewBooking};
pub use cancellation::{CancellationOutcome, CancellationService};
pub use catalog::{CatalogService, RuleService};
pub use error::BookingError;
pub use pricing::{PriceBreakdown, PriceQuote, PricingEngine};
pub use waitlist::WaitlistService;
