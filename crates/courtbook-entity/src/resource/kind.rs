//! Resource type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of bookable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// A playing court. Exclusive.
    Court,
    /// A coach. Exclusive.
    Coach,
    /// Rentable equipment drawn from a finite pool.
    Equipment,
}

impl ResourceType {
    /// Whether at most one confirmed booking may hold this resource at a time.
    ///
    /// Exclusive resources are protected by the storage exclusion constraint;
    /// poolable ones go through the inventory check.
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::Court | Self::Coach)
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Court => "court",
            Self::Coach => "coach",
            Self::Equipment => "equipment",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "court" => Ok(Self::Court),
            "coach" => Ok(Self::Coach),
            "equipment" => Ok(Self::Equipment),
            other => Err(format!("Invalid resource type: {other}")),
        }
    }
}
