//! Repository implementations for all CourtBook entities.
//!
//! Methods that take a `&mut PgConnection` are meant to run inside a
//! caller-owned transaction; the rest use the pool directly.

pub mod booking;
pub mod catalog;
pub mod pricing_rule;
pub mod waitlist;

pub use booking::BookingRepository;
pub use catalog::CatalogRepository;
pub use pricing_rule::PricingRuleRepository;
pub use waitlist::WaitlistRepository;
