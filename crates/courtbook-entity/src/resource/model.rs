//! Court, coach, and equipment catalog rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::ResourceType;

/// A bookable court.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Court {
    /// Unique court identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Surface or court category (e.g. `"indoor"`).
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub court_type: Option<String>,
    /// Hourly rate.
    pub base_price_per_hour: Decimal,
}

/// A bookable coach.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Coach {
    /// Unique coach identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Short biography.
    pub bio: Option<String>,
    /// Hourly rate.
    pub hourly_rate: Decimal,
}

/// A pool of identical rentable equipment units.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Equipment {
    /// Unique equipment identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Number of units in the pool.
    pub total_quantity: i32,
    /// Fee charged once per booking per unit.
    pub price_per_use: Decimal,
}

/// Data required to create a court.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourt {
    /// Display name.
    pub name: String,
    /// Court category.
    #[serde(rename = "type")]
    pub court_type: Option<String>,
    /// Hourly rate.
    pub base_price_per_hour: Decimal,
}

/// Data required to create a coach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCoach {
    /// Display name.
    pub name: String,
    /// Short biography.
    pub bio: Option<String>,
    /// Hourly rate.
    pub hourly_rate: Decimal,
}

/// Data required to create an equipment pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEquipment {
    /// Display name.
    pub name: String,
    /// Number of units in the pool.
    pub total_quantity: i32,
    /// Fee per unit per booking.
    pub price_per_use: Decimal,
}

/// How a resource contributes to the base cost of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tariff {
    /// Charged `rate × hours`.
    Hourly(Decimal),
    /// Charged `price × quantity`, independent of duration.
    PerUse(Decimal),
}

/// Any catalog resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "resource_type", rename_all = "lowercase")]
pub enum Resource {
    /// A court.
    Court(Court),
    /// A coach.
    Coach(Coach),
    /// An equipment pool.
    Equipment(Equipment),
}

impl Resource {
    /// The resource type discriminator.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Self::Court(_) => ResourceType::Court,
            Self::Coach(_) => ResourceType::Coach,
            Self::Equipment(_) => ResourceType::Equipment,
        }
    }

    /// Catalog id.
    pub fn id(&self) -> i64 {
        match self {
            Self::Court(c) => c.id,
            Self::Coach(c) => c.id,
            Self::Equipment(e) => e.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Court(c) => &c.name,
            Self::Coach(c) => &c.name,
            Self::Equipment(e) => &e.name,
        }
    }

    /// Pricing attribute of this resource.
    pub fn tariff(&self) -> Tariff {
        match self {
            Self::Court(c) => Tariff::Hourly(c.base_price_per_hour),
            Self::Coach(c) => Tariff::Hourly(c.hourly_rate),
            Self::Equipment(e) => Tariff::PerUse(e.price_per_use),
        }
    }
}
