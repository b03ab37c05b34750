pub mod attendance;
pub mod employee;
pub mod goal;
pub mod label_record;

pub use attendance::{AnalyticsSummary, AttendanceSummary, ShiftActionResponse, ShiftStatus};
pub use employee::{Employee, NewEmployee};
pub use goal::{Goal, GoalForm, GoalStatus};
pub use label_record::{EmployeeRef, LabelForm, LabelRecord};
