use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize;

/// Embedded employee reference on a label or goal record. The API populates
/// this inline; it may be missing entirely on orphaned records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    #[serde(rename = "_id", default, deserialize_with = "normalize::string_or_empty")]
    pub id: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub name: String,

    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// One logged batch of shipping labels produced for a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    #[serde(rename = "_id", default, deserialize_with = "normalize::string_or_empty")]
    pub id: String,

    #[serde(
        rename = "employeeId",
        default,
        deserialize_with = "normalize::employee_ref_opt"
    )]
    pub employee: Option<EmployeeRef>,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub customer_name: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub customer_email: String,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub total_labels: u64,

    /// Currency per label.
    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub rate: f64,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub paid_labels: u64,

    /// Authoritative when the API supplies it; see [`LabelRecord::revenue`].
    #[serde(default, deserialize_with = "normalize::number_opt")]
    pub total_revenue: Option<f64>,

    #[serde(
        default = "normalize::unknown_status",
        deserialize_with = "normalize::status_or_unknown"
    )]
    pub status: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub notes: String,

    #[serde(default, deserialize_with = "normalize::datetime_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl LabelRecord {
    /// Display name of the owning employee, "Unknown" when the reference is
    /// missing or blank.
    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .map(|e| e.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    /// Id of the owning employee, if any.
    pub fn employee_id(&self) -> Option<&str> {
        self.employee
            .as_ref()
            .map(|e| e.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Revenue of this batch. The API-supplied figure wins when present;
    /// otherwise it is recomputed from count and rate.
    pub fn revenue(&self) -> f64 {
        self.total_revenue
            .unwrap_or_else(|| self.total_labels as f64 * self.rate)
    }
}

/// Payload for creating or editing a label record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelForm {
    pub customer_name: String,
    pub customer_email: String,
    pub total_labels: u64,
    pub rate: f64,
    pub paid_labels: u64,
    pub notes: String,
    pub status: String,
}
