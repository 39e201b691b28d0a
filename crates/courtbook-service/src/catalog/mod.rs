//! Catalog and pricing rule administration.

pub mod rules;
pub mod service;

pub use rules::RuleService;
pub use service::CatalogService;
