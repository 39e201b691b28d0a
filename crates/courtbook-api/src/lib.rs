//! # courtbook-api
//!
//! HTTP API layer for CourtBook built on Axum.
//!
//! Provides the booking, cancellation, waitlist, catalog, and rule
//! endpoints, request logging and CORS middleware, request extractors,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
