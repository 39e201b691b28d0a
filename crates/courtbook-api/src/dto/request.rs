//! Request DTOs with validation.
//!
//! Required text fields default to empty so that a missing field and an
//! empty one are both rejected by `validator` with a 400.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use courtbook_core::types::parse_timestamp;
use courtbook_entity::booking::RequestedItem;
use courtbook_entity::pricing::{CreatePricingRule, RuleConditions, RuleKind};
use courtbook_entity::resource::ResourceType;
use courtbook_entity::waitlist::CreateWaitlistEntry;
use courtbook_service::NewBooking;

use crate::error::ApiError;

/// Create booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Booking user.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub user_name: String,
    /// ISO-8601 start.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub start_time: String,
    /// ISO-8601 end.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub end_time: String,
    /// Requested resources.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub items: Vec<RequestedItem>,
}

impl CreateBookingRequest {
    /// Convert into the coordinator's request, parsing timestamps.
    pub fn into_new_booking(self) -> Result<NewBooking, ApiError> {
        Ok(NewBooking {
            start_time: timestamp("start_time", &self.start_time)?,
            end_time: timestamp("end_time", &self.end_time)?,
            user_name: self.user_name,
            items: self.items,
        })
    }
}

/// Price quote request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    /// ISO-8601 start.
    #[serde(default)]
    #[validate(length(min = 1, message = "start_time is required"))]
    pub start_time: String,
    /// ISO-8601 end.
    #[serde(default)]
    #[validate(length(min = 1, message = "end_time is required"))]
    pub end_time: String,
    /// Resources to price.
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one item is required"))]
    pub items: Vec<RequestedItem>,
}

impl QuoteRequest {
    /// Parsed `(start, end)`.
    pub fn window(&self) -> Result<(NaiveDateTime, NaiveDateTime), ApiError> {
        Ok((
            timestamp("start_time", &self.start_time)?,
            timestamp("end_time", &self.end_time)?,
        ))
    }
}

/// Join waitlist request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinWaitlistRequest {
    /// Waiting user.
    #[serde(default)]
    #[validate(length(min = 1, message = "user_name is required"))]
    pub user_name: String,
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Catalog id.
    pub resource_id: i64,
    /// ISO-8601 start.
    #[serde(default)]
    #[validate(length(min = 1, message = "start_time is required"))]
    pub start_time: String,
    /// ISO-8601 end.
    #[serde(default)]
    #[validate(length(min = 1, message = "end_time is required"))]
    pub end_time: String,
}

impl JoinWaitlistRequest {
    /// Convert into a waitlist row, parsing timestamps.
    pub fn into_entry(self) -> Result<CreateWaitlistEntry, ApiError> {
        Ok(CreateWaitlistEntry {
            start_time: timestamp("start_time", &self.start_time)?,
            end_time: timestamp("end_time", &self.end_time)?,
            user_name: self.user_name,
            resource_type: self.resource_type,
            resource_id: self.resource_id,
        })
    }
}

/// Busy-slot calendar query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusySlotsQuery {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Optional resource kind filter.
    pub resource_type: Option<String>,
    /// Optional resource id filter.
    pub resource_id: Option<String>,
}

impl BusySlotsQuery {
    /// Parse the query. Only `date` is required.
    pub fn parse(&self) -> Result<(NaiveDate, Option<ResourceType>, Option<i64>), ApiError> {
        let date = self
            .date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ApiError::validation("Date required"))?;
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::validation(format!("Invalid date: {date}")))?;

        let resource_type = non_empty(&self.resource_type)
            .map(|t| t.parse::<ResourceType>().map_err(ApiError::validation))
            .transpose()?;
        let resource_id = non_empty(&self.resource_id)
            .map(|id| {
                id.parse::<i64>()
                    .map_err(|_| ApiError::validation(format!("Invalid resource_id: {id}")))
            })
            .transpose()?;

        Ok((date, resource_type, resource_id))
    }
}

/// Query naming a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    /// User name.
    pub user_name: Option<String>,
}

impl UserQuery {
    /// The user name, or a 400 when absent.
    pub fn require(&self) -> Result<&str, ApiError> {
        non_empty(&self.user_name).ok_or_else(|| ApiError::validation("User name required"))
    }
}

/// Create pricing rule request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRuleRequest {
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    /// `multiplier` or `flat_fee`.
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Factor or amount.
    pub value: Decimal,
    /// Conditions as an object or as a JSON-encoded string.
    #[serde(default, deserialize_with = "conditions_object_or_string")]
    pub conditions: RuleConditions,
}

impl From<CreateRuleRequest> for CreatePricingRule {
    fn from(req: CreateRuleRequest) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
            value: req.value,
            conditions: req.conditions,
        }
    }
}

/// Toggle pricing rule request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleRuleRequest {
    /// New active flag.
    pub is_active: bool,
}

/// Create court request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourtRequest {
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    /// Court category.
    #[serde(rename = "type")]
    pub court_type: Option<String>,
    /// Hourly rate.
    pub base_price_per_hour: Decimal,
}

/// Create coach request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCoachRequest {
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    /// Short biography.
    pub bio: Option<String>,
    /// Hourly rate.
    pub hourly_rate: Decimal,
}

/// Create equipment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEquipmentRequest {
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    /// Pool size.
    #[validate(range(min = 0, message = "total_quantity must not be negative"))]
    pub total_quantity: i32,
    /// Fee per unit per booking.
    pub price_per_use: Decimal,
}

fn timestamp(field: &str, raw: &str) -> Result<NaiveDateTime, ApiError> {
    parse_timestamp(raw).ok_or_else(|| ApiError::validation(format!("Invalid {field}: {raw}")))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Admin forms post conditions either as an object or as the text of one.
fn conditions_object_or_string<'de, D>(deserializer: D) -> Result<RuleConditions, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(RuleConditions::default()),
        serde_json::Value::String(text) if text.trim().is_empty() => {
            Ok(RuleConditions::default())
        }
        serde_json::Value::String(text) => serde_json::from_str(&text).map_err(D::Error::custom),
        other => serde_json::from_value(other).map_err(D::Error::custom),
    }
}
