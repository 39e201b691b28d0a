//! Rule applicability predicate.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Conditions gating a pricing rule.
///
/// Every clause that is present must hold; absent clauses match anything.
/// Only the booking's start instant is inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConditions {
    /// Days of week, `0 = Sunday` through `6 = Saturday`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u32>>,
    /// First hour (inclusive) of the rule window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_hour: Option<u32>,
    /// Last hour (exclusive) of the rule window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<u32>,
}

impl RuleConditions {
    /// Whether a booking starting at `start` satisfies these conditions.
    ///
    /// The hour clause applies only when both bounds are set and checks
    /// `start_hour <= hour(start) < end_hour`; the booking's duration is
    /// not compared against the window.
    pub fn matches(&self, start: NaiveDateTime) -> bool {
        if let Some(days) = &self.days_of_week {
            let day = start.weekday().num_days_from_sunday();
            if !days.contains(&day) {
                return false;
            }
        }

        if let (Some(from), Some(until)) = (self.start_hour, self.end_hour) {
            let hour = start.hour();
            if hour < from || hour >= until {
                return false;
            }
        }

        true
    }

    /// Reject out-of-range days and hours.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(days) = &self.days_of_week {
            if let Some(bad) = days.iter().find(|d| **d > 6) {
                return Err(format!("days_of_week entries must be 0..=6, got {bad}"));
            }
        }
        for hour in [self.start_hour, self.end_hour].into_iter().flatten() {
            if hour > 23 {
                return Err(format!("hours must be 0..=23, got {hour}"));
            }
        }
        Ok(())
    }
}
