//! Administrator handlers.

pub mod catalog;
pub mod rules;
