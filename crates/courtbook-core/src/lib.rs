//! # courtbook-core
//!
//! Core crate for CourtBook. Contains configuration schemas, the booking
//! time window type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CourtBook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
