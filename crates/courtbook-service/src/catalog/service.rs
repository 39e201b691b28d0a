//! Court, coach, and equipment catalog service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use courtbook_core::error::AppError;
use courtbook_database::repositories::CatalogRepository;
use courtbook_entity::resource::{
    Coach, Court, CreateCoach, CreateCourt, CreateEquipment, Equipment, ResourceType,
};

/// Reads and administers the resource catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Catalog repository.
    catalog_repo: Arc<CatalogRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(catalog_repo: Arc<CatalogRepository>) -> Self {
        Self { catalog_repo }
    }

    /// All courts by id.
    pub async fn courts(&self) -> Result<Vec<Court>, AppError> {
        self.catalog_repo.list_courts().await
    }

    /// All coaches by id.
    pub async fn coaches(&self) -> Result<Vec<Coach>, AppError> {
        self.catalog_repo.list_coaches().await
    }

    /// All equipment pools by id.
    pub async fn equipment(&self) -> Result<Vec<Equipment>, AppError> {
        self.catalog_repo.list_equipment().await
    }

    /// Add a court.
    pub async fn create_court(&self, data: CreateCourt) -> Result<Court, AppError> {
        require_name(&data.name)?;
        require_price("base_price_per_hour", data.base_price_per_hour)?;
        let court = self.catalog_repo.create_court(&data).await?;
        info!(court_id = court.id, name = %court.name, "Court created");
        Ok(court)
    }

    /// Add a coach.
    pub async fn create_coach(&self, data: CreateCoach) -> Result<Coach, AppError> {
        require_name(&data.name)?;
        require_price("hourly_rate", data.hourly_rate)?;
        let coach = self.catalog_repo.create_coach(&data).await?;
        info!(coach_id = coach.id, name = %coach.name, "Coach created");
        Ok(coach)
    }

    /// Add an equipment pool.
    pub async fn create_equipment(&self, data: CreateEquipment) -> Result<Equipment, AppError> {
        require_name(&data.name)?;
        require_price("price_per_use", data.price_per_use)?;
        if data.total_quantity < 0 {
            return Err(AppError::validation("total_quantity must not be negative"));
        }
        let equipment = self.catalog_repo.create_equipment(&data).await?;
        info!(
            equipment_id = equipment.id,
            name = %equipment.name,
            total_quantity = equipment.total_quantity,
            "Equipment created"
        );
        Ok(equipment)
    }

    /// Remove a catalog entry.
    pub async fn delete(&self, resource_type: ResourceType, id: i64) -> Result<(), AppError> {
        if !self.catalog_repo.delete(resource_type, id).await? {
            return Err(AppError::not_found(format!("{resource_type} {id} not found")));
        }
        info!(%resource_type, id, "Catalog entry deleted");
        Ok(())
    }
}

fn require_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    Ok(())
}

fn require_price(field: &str, value: Decimal) -> Result<(), AppError> {
    if value.is_sign_negative() {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    Ok(())
}
