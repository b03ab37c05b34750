//! Compound predicate over the label table.

use chrono::{DateTime, Utc};

use crate::model::LabelRecord;

/// Criteria from the labels-management toolbar. All predicates are ANDed;
/// an empty criterion constrains nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelFilter {
    /// Case-insensitive substring over customer name or email.
    pub search: String,
    /// Exact employee id; `None` or empty means all employees.
    pub employee_id: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub date_to: Option<DateTime<Utc>>,
}

impl LabelFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.employee_id.as_deref().map_or(true, str::is_empty)
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn matches(&self, record: &LabelRecord) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = record.customer_name.to_lowercase().contains(&needle)
                || record.customer_email.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(id) = self.employee_id.as_deref().filter(|id| !id.is_empty()) {
            if record.employee_id() != Some(id) {
                return false;
            }
        }

        // A record with no timestamp fails any bound that is actually set.
        if let Some(from) = self.date_from {
            match record.created_at {
                Some(t) if t >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.date_to {
            match record.created_at {
                Some(t) if t <= to => {}
                _ => return false,
            }
        }

        true
    }

    /// Stable filter: survivors keep their relative order.
    pub fn apply(&self, records: &[LabelRecord]) -> Vec<LabelRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmployeeRef;
    use chrono::TimeZone;

    fn record(id: &str, customer: &str, email: &str, emp: &str, day: Option<u32>) -> LabelRecord {
        LabelRecord {
            id: id.to_string(),
            customer_name: customer.to_string(),
            customer_email: email.to_string(),
            employee: Some(EmployeeRef {
                id: emp.to_string(),
                name: emp.to_string(),
                profile_picture: None,
            }),
            created_at: day.map(|d| Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<LabelRecord> {
        vec![
            record("1", "Anna Lee", "anna@x.com", "e1", Some(1)),
            record("2", "Bob", "bob@x.com", "e2", Some(10)),
            record("3", "Carol", "carol@x.com", "e1", None),
        ]
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_email() {
        let filter = LabelFilter {
            search: "ann".to_string(),
            ..Default::default()
        };
        let out = filter.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].customer_name, "Anna Lee");

        let by_email = LabelFilter {
            search: "BOB@".to_string(),
            ..Default::default()
        };
        assert_eq!(by_email.apply(&sample()).len(), 1);
    }

    #[test]
    fn employee_filter_is_exact() {
        let filter = LabelFilter {
            employee_id: Some("e1".to_string()),
            ..Default::default()
        };
        let out = filter.apply(&sample());
        assert_eq!(out.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);
    }

    #[test]
    fn empty_employee_id_means_no_constraint() {
        let filter = LabelFilter {
            employee_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 3);
        assert!(filter.is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive_and_dateless_records_fail_them() {
        let filter = LabelFilter {
            date_from: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
            ..Default::default()
        };
        // record 1 sits exactly on the bound, record 3 has no timestamp
        let out = filter.apply(&sample());
        assert_eq!(out.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["1", "2"]);

        let upper = LabelFilter {
            date_to: Some(Utc.with_ymd_and_hms(2025, 6, 5, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(upper.apply(&sample()).len(), 1);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let filter = LabelFilter {
            search: "a".to_string(),
            employee_id: Some("e1".to_string()),
            date_from: Some(Utc.with_ymd_and_hms(2025, 5, 31, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        let out = filter.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn empty_filter_is_identity_and_apply_is_idempotent() {
        let records = sample();
        let empty = LabelFilter::default();
        let once = empty.apply(&records);
        assert_eq!(
            once.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
        );

        let filter = LabelFilter {
            search: "o".to_string(),
            ..Default::default()
        };
        let first = filter.apply(&records);
        let second = filter.apply(&first);
        assert_eq!(
            first.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            second.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
        );
    }
}
