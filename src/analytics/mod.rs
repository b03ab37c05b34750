pub mod aggregate;
pub mod rank;

pub use aggregate::{
    DashboardTotals, EmployeeLabelStats, GoalOverview, StatusSlice, aggregate_by_employee,
    dashboard_totals, goal_overview, status_distribution,
};
pub use rank::{PerformerStanding, top_goal_performers, top_hardworking, top_n, top_punctual};
