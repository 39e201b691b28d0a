//! # courtbook-entity
//!
//! Domain entity models for CourtBook. Every struct in this crate
//! represents a database table row or a domain value object. Row types
//! derive `sqlx::FromRow` in addition to `Serialize`/`Deserialize`.

pub mod booking;
pub mod pricing;
pub mod resource;
pub mod waitlist;
