//! Filtering and pagination over a collection

use crate::domain::Record;

/// List parameters. Filters run before `skip`/`limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: usize,
    pub limit: Option<usize>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl ListQuery {
    fn matches(&self, record: &Record) -> bool {
        if let Some(wanted) = &self.category {
            match &record.category {
                Some(category) if category.to_lowercase() == wanted.to_lowercase() => {}
                _ => return false,
            }
        }
        if let Some(completed) = self.completed {
            if record.completed != completed {
                return false;
            }
        }
        true
    }

    /// Apply the query, preserving insertion order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .skip(self.skip)
            .take(self.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewRecord;
    use chrono::Utc;

    fn records() -> Vec<Record> {
        let now = Utc::now();
        vec![
            NewRecord::new("a").with_category("Work").into_record(1, now),
            NewRecord::new("b").into_record(2, now),
            NewRecord::new("c")
                .with_category("work")
                .completed(true)
                .into_record(3, now),
            NewRecord::new("d").with_category("home").into_record(4, now),
        ]
    }

    fn ids(records: &[Record]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_default_returns_everything_in_order() {
        assert_eq!(ids(&ListQuery::default().apply(&records())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_skip_and_limit() {
        let query = ListQuery {
            skip: 1,
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records())), vec![2, 3]);
    }

    #[test]
    fn test_zero_limit() {
        let query = ListQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert!(query.apply(&records()).is_empty());
    }

    #[test]
    fn test_skip_past_end() {
        let query = ListQuery {
            skip: 10,
            ..Default::default()
        };
        assert!(query.apply(&records()).is_empty());
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let query = ListQuery {
            category: Some("WORK".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records())), vec![1, 3]);
    }

    #[test]
    fn test_category_folds_non_ascii() {
        let records = vec![NewRecord::new("a")
            .with_category("Über")
            .into_record(1, Utc::now())];
        let query = ListQuery {
            category: Some("über".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records)), vec![1]);
    }

    #[test]
    fn test_filters_apply_before_pagination() {
        let query = ListQuery {
            skip: 1,
            category: Some("work".to_string()),
            completed: Some(true),
            ..Default::default()
        };
        assert!(query.apply(&records()).is_empty());

        let query = ListQuery {
            completed: Some(false),
            skip: 1,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records())), vec![2, 4]);
    }
}
