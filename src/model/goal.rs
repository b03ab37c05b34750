use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::label_record::EmployeeRef;
use crate::normalize;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Overdue,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Monthly per-employee target for label count and revenue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "_id", default, deserialize_with = "normalize::string_or_empty")]
    pub id: String,

    #[serde(
        rename = "employeeId",
        default,
        deserialize_with = "normalize::employee_ref_opt"
    )]
    pub employee: Option<EmployeeRef>,

    /// Year-month, "YYYY-MM".
    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub month: String,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub target_labels: u64,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub target_revenue: f64,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub current_labels: u64,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub current_revenue: f64,

    /// Percent; may exceed 100 when the target is beaten.
    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub overall_progress: f64,

    #[serde(default, deserialize_with = "normalize::datetime_opt")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(default)]
    pub status: GoalStatus,
}

impl Goal {
    /// Display name of the assigned employee, "Unknown" when missing.
    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .map(|e| e.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    /// Progress clamped to 0..=100 for progress bars; ranking still uses the
    /// raw `overall_progress` so over-achievers sort ahead.
    pub fn display_progress(&self) -> f64 {
        self.overall_progress.clamp(0.0, 100.0)
    }
}

/// Payload for assigning or editing a goal.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalForm {
    pub employee_id: String,
    pub month: String,
    pub target_labels: u64,
    pub target_revenue: f64,
    pub deadline: String,
}
