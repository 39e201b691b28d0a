//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use courtbook_core::config::AppConfig;
use courtbook_database::DatabasePool;
use courtbook_database::repositories::{
    BookingRepository, CatalogRepository, PricingRuleRepository, WaitlistRepository,
};
use courtbook_service::{
    BookingCoordinator, BookingHistoryService, CancellationService, CatalogService,
    PricingEngine, RuleService, WaitlistService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Services ─────────────────────────────────────────────
    /// Court, coach, and equipment catalog
    pub catalog_service: Arc<CatalogService>,
    /// Pricing rule administration
    pub rule_service: Arc<RuleService>,
    /// Read-only price quotes
    pub pricing_engine: Arc<PricingEngine>,
    /// Atomic booking creation
    pub booking_coordinator: Arc<BookingCoordinator>,
    /// Booking history and busy slots
    pub history_service: Arc<BookingHistoryService>,
    /// Cancellation with waitlist promotion
    pub cancellation_service: Arc<CancellationService>,
    /// Waitlist join
    pub waitlist_service: Arc<WaitlistService>,
}

impl AppState {
    /// Wire repositories and services over one pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let catalog_repo = Arc::new(CatalogRepository::new(pool.clone()));
        let rule_repo = Arc::new(PricingRuleRepository::new(pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(pool.clone()));
        let waitlist_repo = Arc::new(WaitlistRepository::new(pool.clone()));

        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&catalog_repo)));
        let rule_service = Arc::new(RuleService::new(Arc::clone(&rule_repo)));
        let pricing_engine = Arc::new(PricingEngine::new(pool));
        let booking_coordinator = Arc::new(BookingCoordinator::new(
            Arc::clone(&booking_repo),
            config.booking.clone(),
        ));
        let history_service = Arc::new(BookingHistoryService::new(Arc::clone(&booking_repo)));
        let cancellation_service = Arc::new(CancellationService::new(Arc::clone(&booking_repo)));
        let waitlist_service = Arc::new(WaitlistService::new(Arc::clone(&waitlist_repo)));

        Self {
            config: Arc::new(config),
            db,
            catalog_service,
            rule_service,
            pricing_engine,
            booking_coordinator,
            history_service,
            cancellation_service,
            waitlist_service,
        }
    }
}
