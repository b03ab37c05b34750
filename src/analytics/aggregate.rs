//! Grouping and summation over label and goal collections.
//!
//! Everything here is a pure function of its input slice; charts are
//! re-derived from the authoritative list after every reload.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::model::{Goal, GoalStatus, LabelRecord};

/// One bar of the employee-performance chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeLabelStats {
    pub name: String,
    pub labels: u64,
    pub revenue: f64,
}

/// One slice of the status pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub label: String,
    pub count: u64,
}

/// Totals for the admin dashboard cards, derived locally from the label list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardTotals {
    pub total_labels: u64,
    pub average_rate: f64,
    pub total_revenue: f64,
    pub employee_count: usize,
}

/// Goal progress counters for the overview panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalOverview {
    pub active: u64,
    pub completed: u64,
    pub overdue: u64,
    pub average_progress: f64,
}

/// Groups label records by employee display name ("Unknown" when the record
/// carries no employee reference), summing label counts and revenue. The
/// result is sorted descending by label count; ties keep first-seen order.
pub fn aggregate_by_employee(records: &[LabelRecord]) -> Vec<EmployeeLabelStats> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut stats: Vec<EmployeeLabelStats> = Vec::new();

    for record in records {
        let name = record.employee_name();
        let slot = *index.entry(name.to_string()).or_insert_with(|| {
            stats.push(EmployeeLabelStats {
                name: name.to_string(),
                labels: 0,
                revenue: 0.0,
            });
            stats.len() - 1
        });
        stats[slot].labels += record.total_labels;
        stats[slot].revenue += record.revenue();
    }

    stats.sort_by(|a, b| b.labels.cmp(&a.labels));
    stats
}

/// Counts records per status string, capitalized for display, in first-seen
/// order. Blank statuses have already been normalized to "unknown".
pub fn status_distribution(records: &[LabelRecord]) -> Vec<StatusSlice> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut slices: Vec<StatusSlice> = Vec::new();

    for record in records {
        let status = record.status.as_str();
        match index.get(status) {
            Some(&slot) => slices[slot].count += 1,
            None => {
                index.insert(status, slices.len());
                slices.push(StatusSlice {
                    label: capitalize(status),
                    count: 1,
                });
            }
        }
    }

    slices
}

/// Summary-card totals over the label collection. `average_rate` is the mean
/// per-record rate, 0 for an empty collection.
pub fn dashboard_totals(records: &[LabelRecord]) -> DashboardTotals {
    let mut totals = DashboardTotals::default();
    let mut names: HashSet<&str> = HashSet::new();

    for record in records {
        totals.total_labels += record.total_labels;
        totals.total_revenue += record.revenue();
        names.insert(record.employee_name());
    }
    if !records.is_empty() {
        totals.average_rate = records.iter().map(|r| r.rate).sum::<f64>() / records.len() as f64;
    }
    totals.employee_count = names.len();
    totals
}

/// Counts goals by status and averages display progress (clamped, so one
/// runaway over-achiever does not skew the panel).
pub fn goal_overview(goals: &[Goal]) -> GoalOverview {
    let mut overview = GoalOverview::default();

    for goal in goals {
        match goal.status {
            GoalStatus::Active => overview.active += 1,
            GoalStatus::Completed => overview.completed += 1,
            GoalStatus::Overdue => overview.overdue += 1,
            GoalStatus::Unknown => {}
        }
    }
    if !goals.is_empty() {
        overview.average_progress =
            goals.iter().map(Goal::display_progress).sum::<f64>() / goals.len() as f64;
    }
    overview
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmployeeRef;
    use serde_json::json;

    fn record(name: Option<&str>, labels: u64, revenue: f64, status: &str) -> LabelRecord {
        LabelRecord {
            employee: name.map(|n| EmployeeRef {
                id: format!("id-{n}"),
                name: n.to_string(),
                profile_picture: None,
            }),
            total_labels: labels,
            total_revenue: Some(revenue),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn aggregates_sum_per_employee_and_sort_by_labels() {
        let records = vec![
            record(Some("Anna"), 5, 10.0, "pending"),
            record(Some("Bob"), 20, 40.0, "paid"),
            record(Some("Anna"), 7, 14.0, "paid"),
            record(None, 1, 2.0, "pending"),
        ];
        let stats = aggregate_by_employee(&records);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].name, "Bob");
        assert_eq!(stats[0].labels, 20);
        assert_eq!(stats[1].name, "Anna");
        assert_eq!(stats[1].labels, 12);
        assert_eq!(stats[1].revenue, 24.0);
        assert_eq!(stats[2].name, "Unknown");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = vec![
            record(Some("Zed"), 3, 0.0, "pending"),
            record(Some("Amy"), 3, 0.0, "pending"),
        ];
        let stats = aggregate_by_employee(&records);
        assert_eq!(stats[0].name, "Zed");
        assert_eq!(stats[1].name, "Amy");
    }

    #[test]
    fn absent_revenue_contributes_count_times_rate() {
        // A record without a server-supplied revenue figure is not counted
        // as zero; its revenue is reconstructed from count and rate.
        let records: Vec<LabelRecord> = serde_json::from_value(json!([
            {"employeeId": {"_id": "e1", "name": "Anna"}, "totalLabels": 10, "rate": 0.5},
            {"employeeId": {"_id": "e1", "name": "Anna"}, "totalLabels": 4, "rate": 1.0,
             "totalRevenue": 7.5}
        ]))
        .unwrap();
        let stats = aggregate_by_employee(&records);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].revenue, 5.0 + 7.5);
    }

    #[test]
    fn status_distribution_capitalizes_in_first_seen_order() {
        // Worked example: string counts, null counts, mixed-case statuses.
        let records: Vec<LabelRecord> = serde_json::from_value(json!([
            {"totalLabels": "10", "totalRevenue": "5.5", "status": "Paid"},
            {"totalLabels": null, "totalRevenue": 3, "status": "pending"}
        ]))
        .unwrap();
        assert_eq!(records[0].total_labels, 10);
        assert_eq!(records[1].total_labels, 0);
        assert_eq!(records[0].revenue(), 5.5);
        assert_eq!(records[1].revenue(), 3.0);

        let slices = status_distribution(&records);
        assert_eq!(
            slices,
            vec![
                StatusSlice { label: "Paid".into(), count: 1 },
                StatusSlice { label: "Pending".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn dashboard_totals_over_empty_input_are_zero() {
        assert_eq!(dashboard_totals(&[]), DashboardTotals::default());
    }

    #[test]
    fn dashboard_totals_count_distinct_employees() {
        let records = vec![
            record(Some("Anna"), 5, 10.0, "paid"),
            record(Some("Anna"), 5, 10.0, "paid"),
            record(Some("Bob"), 2, 4.0, "pending"),
        ];
        let totals = dashboard_totals(&records);
        assert_eq!(totals.total_labels, 12);
        assert_eq!(totals.total_revenue, 24.0);
        assert_eq!(totals.employee_count, 2);
    }

    #[test]
    fn goal_overview_counts_statuses_and_averages_clamped_progress() {
        let goals: Vec<Goal> = serde_json::from_value(json!([
            {"status": "active", "overallProgress": 50.0},
            {"status": "completed", "overallProgress": 150.0},
            {"status": "overdue", "overallProgress": 10.0},
            {"status": "mystery", "overallProgress": 40.0}
        ]))
        .unwrap();
        let overview = goal_overview(&goals);
        assert_eq!(overview.active, 1);
        assert_eq!(overview.completed, 1);
        assert_eq!(overview.overdue, 1);
        // 150 clamps to 100: (50 + 100 + 10 + 40) / 4
        assert_eq!(overview.average_progress, 50.0);
    }
}
