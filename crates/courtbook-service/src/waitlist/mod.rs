//! Waitlist management.

pub mod service;

pub use service::WaitlistService;
