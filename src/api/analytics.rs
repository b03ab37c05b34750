//! Attendance analytics and shift-control endpoints.

use super::{ApiClient, ApiResult};
use crate::model::{AnalyticsSummary, AttendanceSummary, ShiftActionResponse, ShiftStatus};

impl ApiClient {
    pub async fn analytics_summary(&self) -> ApiResult<AnalyticsSummary> {
        self.get_json("/api/analytics/summary").await
    }

    pub async fn total_hours(&self) -> ApiResult<Vec<AttendanceSummary>> {
        self.get_json("/api/analytics/total-hours").await
    }

    pub async fn top_punctual(&self) -> ApiResult<Vec<AttendanceSummary>> {
        self.get_json("/api/analytics/top-punctual").await
    }

    pub async fn top_hardworking(&self) -> ApiResult<Vec<AttendanceSummary>> {
        self.get_json("/api/analytics/top-hardworking").await
    }

    pub async fn shift_status(&self) -> ApiResult<ShiftStatus> {
        self.get_json("/api/attendance/shift-status").await
    }

    /// Start a fresh shift for everyone.
    pub async fn start_shift(&self) -> ApiResult<ShiftActionResponse> {
        self.post_json("/api/attendance/start-shift", &()).await
    }

    /// Wrap up the day for everyone.
    pub async fn end_shift(&self) -> ApiResult<ShiftActionResponse> {
        self.post_json("/api/attendance/time-to-go", &()).await
    }
}
