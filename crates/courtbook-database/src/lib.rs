//! # courtbook-database
//!
//! PostgreSQL connection management, embedded migrations, and repository
//! implementations for the CourtBook catalog, pricing rules, bookings, and
//! waitlist.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
