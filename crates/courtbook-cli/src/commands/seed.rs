//! Demo catalog seeding.

use std::sync::Arc;

use rust_decimal::Decimal;

use courtbook_core::config::AppConfig;
use courtbook_core::error::AppError;
use courtbook_database::repositories::{CatalogRepository, PricingRuleRepository};
use courtbook_entity::pricing::{CreatePricingRule, RuleConditions, RuleKind};
use courtbook_entity::resource::{CreateCoach, CreateCourt, CreateEquipment};
use courtbook_service::{CatalogService, RuleService};

use crate::output;

/// Execute the seed command. Does nothing once any court exists.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let db = super::create_db_pool(config).await?;
    courtbook_database::migration::run_migrations(db.pool()).await?;

    let catalog = CatalogService::new(Arc::new(CatalogRepository::new(db.pool().clone())));
    let rules = RuleService::new(Arc::new(PricingRuleRepository::new(db.pool().clone())));

    if !catalog.courts().await?.is_empty() {
        output::print_warning("Catalog already seeded; skipping.");
        return Ok(());
    }

    for (name, kind, rate) in [
        ("Court 1", "indoor", 20),
        ("Court 2", "indoor", 20),
        ("Court 3", "outdoor", 15),
        ("Court 4", "outdoor", 15),
    ] {
        catalog
            .create_court(CreateCourt {
                name: name.into(),
                court_type: Some(kind.into()),
                base_price_per_hour: Decimal::from(rate),
            })
            .await?;
    }

    for (name, bio, rate) in [
        ("Anna Lee", "Former national doubles player", 30),
        ("Marco Diaz", "Junior and beginner coaching", 25),
        ("Priya Nair", "Footwork and conditioning", 35),
    ] {
        catalog
            .create_coach(CreateCoach {
                name: name.into(),
                bio: Some(bio.into()),
                hourly_rate: Decimal::from(rate),
            })
            .await?;
    }

    for (name, quantity, price) in [("Racket", 10, 5), ("Shoes", 8, 4), ("Shuttlecock tube", 20, 3)]
    {
        catalog
            .create_equipment(CreateEquipment {
                name: name.into(),
                total_quantity: quantity,
                price_per_use: Decimal::from(price),
            })
            .await?;
    }

    rules
        .create(CreatePricingRule {
            name: "Weekend surcharge".into(),
            kind: RuleKind::Multiplier,
            value: Decimal::new(12, 1),
            conditions: RuleConditions {
                days_of_week: Some(vec![0, 6]),
                ..Default::default()
            },
        })
        .await?;
    rules
        .create(CreatePricingRule {
            name: "Evening peak".into(),
            kind: RuleKind::Multiplier,
            value: Decimal::new(15, 1),
            conditions: RuleConditions {
                start_hour: Some(18),
                end_hour: Some(21),
                ..Default::default()
            },
        })
        .await?;

    output::print_success("Seeded 4 courts, 3 coaches, 3 equipment pools, and 2 pricing rules.");
    db.close().await;
    Ok(())
}
