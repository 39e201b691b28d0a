//! Shared value types used across CourtBook crates.

pub mod window;

pub use window::{TimeWindow, parse_timestamp};
