//! Admin portal state: the one mutable container in the crate.
//!
//! All chart/table data is re-derived from the raw lists held here; the
//! analytics functions themselves are pure. Fetches are independent: a
//! failed request logs a warning and leaves its slot untouched, it never
//! blocks or corrupts the others.

use tracing::{info, warn};

use crate::analytics::{
    self, DashboardTotals, EmployeeLabelStats, PerformerStanding, StatusSlice,
};
use crate::api::goals::GoalAnalytics;
use crate::api::{ApiClient, ApiResult, BulkOutcome};
use crate::filter::LabelFilter;
use crate::model::{
    AnalyticsSummary, AttendanceSummary, Employee, Goal, LabelRecord, ShiftStatus,
};
use crate::selection::SelectionSet;

pub struct AdminPortal {
    client: ApiClient,
    top_n: usize,

    pub employees: Vec<Employee>,
    pub labels: Vec<LabelRecord>,
    pub goals: Vec<Goal>,
    pub summary: AnalyticsSummary,
    /// Full per-employee attendance aggregates (total-hours endpoint).
    pub attendance: Vec<AttendanceSummary>,
    /// Server-ranked performer lists; empty when the fetch failed, in which
    /// case the panels fall back to ranking `attendance` locally.
    pub top_punctual: Vec<AttendanceSummary>,
    pub top_hardworking: Vec<AttendanceSummary>,
    pub goal_analytics: Option<GoalAnalytics>,
    pub shift: ShiftStatus,

    filter: LabelFilter,
    selection: SelectionSet,
}

impl AdminPortal {
    pub fn new(client: ApiClient, top_n: usize) -> Self {
        Self {
            client,
            top_n,
            employees: Vec::new(),
            labels: Vec::new(),
            goals: Vec::new(),
            summary: AnalyticsSummary::default(),
            attendance: Vec::new(),
            top_punctual: Vec::new(),
            top_hardworking: Vec::new(),
            goal_analytics: None,
            shift: ShiftStatus::default(),
            filter: LabelFilter::default(),
            selection: SelectionSet::new(),
        }
    }

    /// Fan out every independent GET concurrently and absorb whatever came
    /// back. Each slot keeps its previous value on failure.
    pub async fn load_all(&mut self) {
        let (employees, labels, goals, summary, attendance, punctual, hardworking, analytics, shift) = tokio::join!(
            self.client.list_employees(),
            self.client.list_labels(),
            self.client.current_goals(),
            self.client.analytics_summary(),
            self.client.total_hours(),
            self.client.top_punctual(),
            self.client.top_hardworking(),
            self.client.goal_analytics(),
            self.client.shift_status(),
        );

        absorb(&mut self.employees, employees, "employees");
        absorb(&mut self.labels, labels, "labels");
        absorb(&mut self.goals, goals, "goals");
        absorb(&mut self.summary, summary, "analytics summary");
        absorb(&mut self.attendance, attendance, "total hours");
        absorb(&mut self.top_punctual, punctual, "top punctual");
        absorb(&mut self.top_hardworking, hardworking, "top hardworking");
        match analytics {
            Ok(v) => self.goal_analytics = Some(v),
            Err(e) => warn!(error = %e, "goal analytics fetch failed; deriving locally"),
        }
        absorb(&mut self.shift, shift, "shift status");

        self.prune_selection();
        info!(
            employees = self.employees.len(),
            labels = self.labels.len(),
            goals = self.goals.len(),
            "portal data loaded"
        );
    }

    pub async fn reload_labels(&mut self) {
        absorb(&mut self.labels, self.client.list_labels().await, "labels");
        self.prune_selection();
    }

    // ----- filtering & selection -----

    pub fn filter(&self) -> &LabelFilter {
        &self.filter
    }

    /// Changing the filter shrinks/extends the visible view, so the
    /// selection is pruned to stay a subset of it.
    pub fn set_filter(&mut self, filter: LabelFilter) {
        self.filter = filter;
        self.prune_selection();
    }

    pub fn visible_labels(&self) -> Vec<LabelRecord> {
        self.filter.apply(&self.labels)
    }

    pub fn visible_label_ids(&self) -> Vec<String> {
        self.labels
            .iter()
            .filter(|r| self.filter.matches(r))
            .map(|r| r.id.clone())
            .collect()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn select_all_visible(&mut self) {
        let visible = self.visible_label_ids();
        self.selection.select_all(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_all_visible_selected(&self) -> bool {
        self.selection.is_all_selected(&self.visible_label_ids())
    }

    fn prune_selection(&mut self) {
        let visible = self.visible_label_ids();
        self.selection.prune(&visible);
    }

    // ----- bulk actions -----

    /// Delete the selected labels, then reload the authoritative list no
    /// matter how many individual deletes failed.
    pub async fn bulk_delete_selected(&mut self) -> BulkOutcome {
        let ids = self.selection.ids();
        let outcome = self.client.delete_labels(&ids).await;
        self.selection.clear();
        self.reload_labels().await;
        outcome
    }

    /// Set the status of the selected labels, then reload.
    pub async fn bulk_mark_selected(&mut self, status: &str) -> BulkOutcome {
        let ids = self.selection.ids();
        let outcome = self.client.update_labels_status(&ids, status).await;
        self.selection.clear();
        self.reload_labels().await;
        outcome
    }

    // ----- shift control -----

    pub async fn start_shift(&mut self) -> ApiResult<()> {
        let resp = self.client.start_shift().await?;
        if resp.success {
            self.shift.shift_ended = false;
            self.shift.shift_end_time = None;
        } else {
            warn!(error = %resp.error, "start-shift rejected");
        }
        Ok(())
    }

    pub async fn end_shift(&mut self) -> ApiResult<()> {
        let resp = self.client.end_shift().await?;
        if resp.success {
            self.shift.shift_ended = true;
            self.shift.shift_end_time = resp.shift_end_time;
        } else {
            warn!(error = %resp.error, "end-shift rejected");
        }
        Ok(())
    }

    // ----- derived views -----

    /// Roster rows matching the search box.
    pub fn search_employees(&self, term: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.matches_search(term))
            .collect()
    }

    pub fn employee_performance(&self) -> Vec<EmployeeLabelStats> {
        analytics::aggregate_by_employee(&self.labels)
    }

    pub fn label_status_distribution(&self) -> Vec<StatusSlice> {
        analytics::status_distribution(&self.labels)
    }

    pub fn dashboard_totals(&self) -> DashboardTotals {
        analytics::dashboard_totals(&self.labels)
    }

    pub fn top_punctual_panel(&self) -> Vec<AttendanceSummary> {
        if self.top_punctual.is_empty() {
            analytics::top_punctual(&self.attendance, self.top_n)
        } else {
            analytics::top_n(&self.top_punctual, |s| s.punctuality_rate, self.top_n)
        }
    }

    pub fn top_hardworking_panel(&self) -> Vec<AttendanceSummary> {
        if self.top_hardworking.is_empty() {
            analytics::top_hardworking(&self.attendance, self.top_n)
        } else {
            analytics::top_n(&self.top_hardworking, |s| s.total_hours, self.top_n)
        }
    }

    /// Server-computed goal analytics when available, locally derived
    /// otherwise.
    pub fn goal_panel(&self) -> GoalAnalytics {
        match &self.goal_analytics {
            Some(fetched) => fetched.clone(),
            None => {
                let overview = analytics::goal_overview(&self.goals);
                GoalAnalytics {
                    top_performers: self.top_goal_performers(),
                    active_goals: overview.active,
                    completed_goals: overview.completed,
                    overdue_goals: overview.overdue,
                    average_progress: overview.average_progress,
                }
            }
        }
    }

    pub fn top_goal_performers(&self) -> Vec<PerformerStanding> {
        analytics::top_goal_performers(&self.goals, self.top_n)
    }
}

fn absorb<T>(slot: &mut T, fetched: ApiResult<T>, what: &str) {
    match fetched {
        Ok(value) => *slot = value,
        Err(e) => warn!(error = %e, what, "fetch failed; keeping previous data"),
    }
}
