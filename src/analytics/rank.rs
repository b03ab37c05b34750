//! Top-N selection for the performer panels.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{AttendanceSummary, Goal};
use crate::normalize;

/// Row of the top-performers panel, either fetched from the goal analytics
/// endpoint or derived locally from the goal list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerStanding {
    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub progress: f64,

    #[serde(default, deserialize_with = "normalize::count_or_zero")]
    pub labels: u64,

    #[serde(default, deserialize_with = "normalize::number_or_zero")]
    pub revenue: f64,
}

/// The `n` highest-scoring items under `metric`, descending. The sort is
/// stable, so ties keep input order; the input itself is never touched.
/// NaN metric values rank last, after every comparable key.
pub fn top_n<T, K, F>(items: &[T], metric: F, n: usize) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let keys: Vec<K> = items.iter().map(&metric).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| cmp_desc(&keys[a], &keys[b]));
    order.truncate(n);
    order.into_iter().map(|i| items[i].clone()).collect()
}

/// Descending order over possibly-incomparable keys. A key that is not
/// comparable with itself (NaN) sorts after every comparable key and equal
/// to its own kind, so the comparator stays a consistent total preorder and
/// `sort_by` never sees contradictory answers.
fn cmp_desc<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    match b.partial_cmp(a) {
        Some(order) => order,
        None => {
            let a_ranked = a.partial_cmp(a).is_some();
            let b_ranked = b.partial_cmp(b).is_some();
            match (a_ranked, b_ranked) {
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                _ => Ordering::Equal,
            }
        }
    }
}

/// Most punctual employees first.
pub fn top_punctual(summaries: &[AttendanceSummary], n: usize) -> Vec<AttendanceSummary> {
    top_n(summaries, |s| s.punctuality_rate, n)
}

/// Most hours worked first.
pub fn top_hardworking(summaries: &[AttendanceSummary], n: usize) -> Vec<AttendanceSummary> {
    top_n(summaries, |s| s.total_hours, n)
}

/// Highest goal progress first, flattened into panel rows. Raw progress is
/// used for ordering so over-100% performers rank ahead.
pub fn top_goal_performers(goals: &[Goal], n: usize) -> Vec<PerformerStanding> {
    top_n(goals, |g| g.overall_progress, n)
        .into_iter()
        .map(|g| PerformerStanding {
            name: g.employee_name().to_string(),
            progress: g.overall_progress,
            labels: g.current_labels,
            revenue: g.current_revenue,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, rate: f64, hours: f64) -> AttendanceSummary {
        AttendanceSummary {
            name: name.to_string(),
            punctuality_rate: rate,
            total_hours: hours,
            ..Default::default()
        }
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let rows = vec![
            summary("a", 70.0, 1.0),
            summary("b", 95.0, 2.0),
            summary("c", 80.0, 3.0),
        ];
        let top = top_punctual(&rows, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "b");
        assert_eq!(top[1].name, "c");
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![
            summary("first", 50.0, 8.0),
            summary("second", 50.0, 8.0),
            summary("third", 50.0, 8.0),
        ];
        let top = top_hardworking(&rows, 3);
        let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn n_larger_than_input_returns_everything() {
        let rows = vec![summary("only", 10.0, 1.0)];
        assert_eq!(top_punctual(&rows, 10).len(), 1);
        assert!(top_punctual(&[], 3).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let rows = vec![summary("a", 1.0, 0.0), summary("b", 2.0, 0.0)];
        let _ = top_punctual(&rows, 1);
        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[1].name, "b");
    }

    #[test]
    fn nan_metrics_rank_last_without_panicking() {
        let rows = vec![summary("a", f64::NAN, 0.0), summary("b", 3.0, 0.0)];
        let top = top_punctual(&rows, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "b");
        assert_eq!(top[1].name, "a");
    }

    #[test]
    fn interleaved_nans_keep_the_comparator_consistent() {
        // Large enough to engage the real merge-sort paths, with NaN keys
        // scattered throughout.
        let rows: Vec<AttendanceSummary> = (0..200)
            .map(|i| {
                let rate = if i % 3 == 0 { f64::NAN } else { f64::from(i) };
                summary(&format!("e{i}"), rate, 0.0)
            })
            .collect();
        let top = top_punctual(&rows, rows.len());
        assert_eq!(top.len(), rows.len());

        // All comparable rates first, descending; NaN rows trail in input
        // order.
        let first_nan = top
            .iter()
            .position(|s| s.punctuality_rate.is_nan())
            .unwrap();
        assert!(top[..first_nan]
            .windows(2)
            .all(|w| w[0].punctuality_rate >= w[1].punctuality_rate));
        assert!(top[first_nan..].iter().all(|s| s.punctuality_rate.is_nan()));
        assert_eq!(top[first_nan..].len(), rows.len().div_ceil(3));
    }
}
