//! Route definitions for the CourtBook HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(booking_routes())
        .merge(waitlist_routes())
        .merge(catalog_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Booking creation, calendar, cancellation, history, quotes
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(handlers::booking::busy_slots).post(handlers::booking::create_booking),
        )
        .route("/bookings/{id}/cancel", post(handlers::booking::cancel_booking))
        .route("/my-bookings", get(handlers::booking::my_bookings))
        .route("/quote", post(handlers::quote::quote))
}

/// Waitlist join and listing
fn waitlist_routes() -> Router<AppState> {
    Router::new().route(
        "/waitlist",
        get(handlers::waitlist::list_waitlist).post(handlers::waitlist::join_waitlist),
    )
}

/// Public catalog reads
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/courts", get(handlers::catalog::list_courts))
        .route("/coaches", get(handlers::catalog::list_coaches))
        .route("/equipment", get(handlers::catalog::list_equipment))
}

/// Catalog and pricing rule administration
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/courts", post(handlers::admin::catalog::create_court))
        .route(
            "/admin/courts/{id}",
            delete(handlers::admin::catalog::delete_court),
        )
        .route("/admin/coaches", post(handlers::admin::catalog::create_coach))
        .route(
            "/admin/coaches/{id}",
            delete(handlers::admin::catalog::delete_coach),
        )
        .route(
            "/admin/equipment",
            post(handlers::admin::catalog::create_equipment),
        )
        .route(
            "/admin/equipment/{id}",
            delete(handlers::admin::catalog::delete_equipment),
        )
        .route(
            "/admin/rules",
            get(handlers::admin::rules::list_rules).post(handlers::admin::rules::create_rule),
        )
        .route("/admin/rules/{id}", patch(handlers::admin::rules::toggle_rule))
}

/// Liveness and database checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/db", get(handlers::health::health_db))
}
