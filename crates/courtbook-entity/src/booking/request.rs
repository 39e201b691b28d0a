//! Requested booking items.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceType;

/// One resource asked for in a booking or quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedItem {
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Catalog id.
    pub resource_id: i64,
    /// Units requested; defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

impl RequestedItem {
    /// Build a single-unit request.
    pub fn new(resource_type: ResourceType, resource_id: i64) -> Self {
        Self {
            resource_type,
            resource_id,
            quantity: None,
        }
    }

    /// Build a request for several units.
    pub fn with_quantity(resource_type: ResourceType, resource_id: i64, quantity: i32) -> Self {
        Self {
            resource_type,
            resource_id,
            quantity: Some(quantity),
        }
    }

    /// Units requested, defaulting to 1.
    pub fn quantity(&self) -> i32 {
        self.quantity.unwrap_or(1)
    }
}
