use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize;

/// Per-employee attendance aggregate, read-only from the analytics endpoints
/// (total-hours, top-punctual, top-hardworking all share this shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub employee_id: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub name: String,

    /// Percentage, 0-100.
    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub punctuality_rate: f64,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub total_hours: f64,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub avg_hours_per_day: f64,
}

/// Whether the company-wide shift has been wrapped up for the day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftStatus {
    #[serde(default)]
    pub shift_ended: bool,

    #[serde(default, deserialize_with = "normalize::datetime_opt")]
    pub shift_end_time: Option<DateTime<Utc>>,
}

/// Response of the start-shift / end-shift actions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftActionResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub action: String,

    #[serde(default, deserialize_with = "normalize::datetime_opt")]
    pub shift_end_time: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub error: String,
}

/// Company-wide counters for the dashboard summary cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub total_employees: u64,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub today_attendance: u64,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub week_hours: f64,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub late_today: u64,
}
