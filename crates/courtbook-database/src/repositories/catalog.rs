//! Court, coach, and equipment repository.

use sqlx::{PgConnection, PgPool};

use courtbook_core::result::AppResult;
use courtbook_entity::resource::{
    Coach, Court, CreateCoach, CreateCourt, CreateEquipment, Equipment, Resource, ResourceType,
};

use crate::error::db_error;

/// Repository for the resource catalog.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Create a new catalog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all courts.
    pub async fn list_courts(&self) -> AppResult<Vec<Court>> {
        sqlx::query_as::<_, Court>("SELECT * FROM courts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list courts", e))
    }

    /// List all coaches.
    pub async fn list_coaches(&self) -> AppResult<Vec<Coach>> {
        sqlx::query_as::<_, Coach>("SELECT * FROM coaches ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list coaches", e))
    }

    /// List all equipment pools.
    pub async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list equipment", e))
    }

    /// Create a court.
    pub async fn create_court(&self, data: &CreateCourt) -> AppResult<Court> {
        sqlx::query_as::<_, Court>(
            "INSERT INTO courts (name, type, base_price_per_hour) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.court_type)
        .bind(data.base_price_per_hour)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create court", e))
    }

    /// Create a coach.
    pub async fn create_coach(&self, data: &CreateCoach) -> AppResult<Coach> {
        sqlx::query_as::<_, Coach>(
            "INSERT INTO coaches (name, bio, hourly_rate) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.bio)
        .bind(data.hourly_rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create coach", e))
    }

    /// Create an equipment pool.
    pub async fn create_equipment(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            "INSERT INTO equipment (name, total_quantity, price_per_use) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.total_quantity)
        .bind(data.price_per_use)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create equipment", e))
    }

    /// Delete a catalog entry. Returns whether a row was removed.
    pub async fn delete(&self, resource_type: ResourceType, id: i64) -> AppResult<bool> {
        let sql = match resource_type {
            ResourceType::Court => "DELETE FROM courts WHERE id = $1",
            ResourceType::Coach => "DELETE FROM coaches WHERE id = $1",
            ResourceType::Equipment => "DELETE FROM equipment WHERE id = $1",
        };
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(&format!("Failed to delete {resource_type}"), e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve a catalog entry inside a transaction.
    pub async fn find_resource(
        conn: &mut PgConnection,
        resource_type: ResourceType,
        id: i64,
    ) -> AppResult<Option<Resource>> {
        let context = format!("Failed to load {resource_type} {id}");
        match resource_type {
            ResourceType::Court => sqlx::query_as::<_, Court>("SELECT * FROM courts WHERE id = $1")
                .bind(id)
                .fetch_optional(conn)
                .await
                .map(|row| row.map(Resource::Court))
                .map_err(|e| db_error(&context, e)),
            ResourceType::Coach => {
                sqlx::query_as::<_, Coach>("SELECT * FROM coaches WHERE id = $1")
                    .bind(id)
                    .fetch_optional(conn)
                    .await
                    .map(|row| row.map(Resource::Coach))
                    .map_err(|e| db_error(&context, e))
            }
            ResourceType::Equipment => Ok(Self::find_equipment(conn, id)
                .await?
                .map(Resource::Equipment)),
        }
    }

    /// Load an equipment pool inside a transaction.
    pub async fn find_equipment(conn: &mut PgConnection, id: i64) -> AppResult<Option<Equipment>> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| db_error("Failed to load equipment", e))
    }
}
