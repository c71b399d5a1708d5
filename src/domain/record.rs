//! Record model

use crate::domain::validation::{self, ValidationReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn validate_serialized(value: &impl Serialize) -> ValidationReport {
    match serde_json::to_value(value) {
        Ok(value) => validation::validate(&value),
        Err(e) => ValidationReport {
            errors: vec![e.to_string()],
        },
    }
}

/// First id that appears more than once, in collection order
pub fn first_duplicate_id(records: &[Record]) -> Option<u64> {
    let mut seen = HashSet::new();
    records.iter().map(|r| r.id).find(|id| !seen.insert(*id))
}

/// A single to-do item as stored in the backing file.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Validate this record against the same rules applied to raw input
    pub fn validate(&self) -> ValidationReport {
        validate_serialized(self)
    }
}

/// Input for creating a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewRecord {
    pub fn new(text: impl Into<String>) -> Self {
        NewRecord {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn validate(&self) -> ValidationReport {
        validate_serialized(self)
    }

    /// Turn into a stored record with the given id and creation time
    pub fn into_record(self, id: u64, created_at: DateTime<Utc>) -> Record {
        Record {
            id,
            text: self.text,
            completed: self.completed,
            category: self.category,
            created_at,
            updated_at: None,
        }
    }
}

/// Partial update of a record. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
    /// `Some(None)` clears the category.
    pub category: Option<Option<String>>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none() && self.category.is_none()
    }

    /// Return a copy of `record` with this patch applied
    pub fn apply_to(&self, record: &Record) -> Record {
        let mut updated = record.clone();
        if let Some(text) = &self.text {
            updated.text = text.clone();
        }
        if let Some(completed) = self.completed {
            updated.completed = completed;
        }
        if let Some(category) = &self.category {
            updated.category = category.clone();
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Record {
        NewRecord::new("write report")
            .with_category("work")
            .into_record(1, Utc.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_serialized_field_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"text":"write report","completed":false,"category":"work","created_at":"2025-01-17T09:00:00Z"}"#
        );
    }

    #[test]
    fn test_optional_fields_default_on_read() {
        let record: Record = serde_json::from_str(
            r#"{"id":3,"text":"a","completed":true,"created_at":"2025-01-17T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.category, None);
        assert_eq!(record.updated_at, None);
    }

    #[test]
    fn test_new_record_validation() {
        assert!(NewRecord::new("ok").validate().is_valid());
        assert_eq!(
            NewRecord::new("  ").validate().errors,
            vec![validation::TEXT_REQUIRED]
        );
    }

    #[test]
    fn test_first_duplicate_id() {
        let at = Utc.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap();
        let unique = vec![
            NewRecord::new("a").into_record(1, at),
            NewRecord::new("b").into_record(2, at),
        ];
        assert_eq!(first_duplicate_id(&unique), None);

        let repeated = vec![
            NewRecord::new("a").into_record(4, at),
            NewRecord::new("b").into_record(1, at),
            NewRecord::new("c").into_record(4, at),
        ];
        assert_eq!(first_duplicate_id(&repeated), Some(4));
    }

    #[test]
    fn test_record_and_new_record_share_rules() {
        let mut record = sample();
        assert!(record.validate().is_valid());
        record.text = "x".repeat(201);
        assert_eq!(record.validate().errors, vec![validation::TEXT_TOO_LONG]);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let record = sample();
        let patch = RecordPatch {
            completed: Some(true),
            ..Default::default()
        };
        let updated = patch.apply_to(&record);
        assert!(updated.completed);
        assert_eq!(updated.text, record.text);
        assert_eq!(updated.category, record.category);
    }

    #[test]
    fn test_patch_clears_category() {
        let patch = RecordPatch {
            category: Some(None),
            ..Default::default()
        };
        assert_eq!(patch.apply_to(&sample()).category, None);
        assert!(!patch.is_empty());
        assert!(RecordPatch::default().is_empty());
    }
}
