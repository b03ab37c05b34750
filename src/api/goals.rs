//! Goal endpoints and the server-computed goal analytics snapshot.

use serde::Deserialize;
use serde_json::Value;

use super::{ApiClient, ApiResult};
use crate::analytics::PerformerStanding;
use crate::model::{Goal, GoalForm};
use crate::normalize;

/// Goal analytics as served by the admin endpoint. The same numbers can be
/// derived locally (`analytics::goal_overview`, `top_goal_performers`) when
/// this fetch fails.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnalytics {
    #[serde(default)]
    pub top_performers: Vec<PerformerStanding>,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub active_goals: u64,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub completed_goals: u64,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub overdue_goals: u64,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub average_progress: f64,
}

impl ApiClient {
    /// Current-month goals, one per employee.
    pub async fn current_goals(&self) -> ApiResult<Vec<Goal>> {
        self.get_json("/api/goals/admin/current").await
    }

    pub async fn goal_analytics(&self) -> ApiResult<GoalAnalytics> {
        self.get_json("/api/goals/admin/analytics").await
    }

    pub async fn set_employee_goal(&self, employee_id: &str, form: &GoalForm) -> ApiResult<()> {
        let _: Value = self
            .post_json(&format!("/api/goals/employee/{employee_id}"), form)
            .await?;
        Ok(())
    }

    pub async fn update_goal(&self, id: &str, form: &GoalForm) -> ApiResult<()> {
        self.put_json(&format!("/api/goals/admin/{id}"), form).await
    }
}
