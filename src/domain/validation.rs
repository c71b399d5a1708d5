//! Record validation
//!
//! Validation runs over raw JSON values so that wrongly typed input (for
//! example `"completed": "yes"`) can be reported instead of failing to
//! deserialize. Every rule is checked; errors are accumulated in a fixed
//! order (text rules, then completed, then category).

use serde_json::Value;
use std::collections::HashSet;

/// Maximum record text length, in characters.
pub const MAX_TEXT_LEN: usize = 200;

pub const TEXT_REQUIRED: &str = "text is required";
pub const TEXT_NOT_STRING: &str = "text must be a string";
pub const TEXT_TOO_LONG: &str = "text too long";
pub const COMPLETED_NOT_BOOL: &str = "completed must be boolean";
pub const CATEGORY_NOT_STRING: &str = "category must be a string";
pub const NOT_AN_OBJECT: &str = "record must be a JSON object";

/// Outcome of validating a single record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Validate a record given as a JSON value.
pub fn validate(record: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(fields) = record.as_object() else {
        report.push(NOT_AN_OBJECT);
        return report;
    };

    match fields.get("text") {
        None | Some(Value::Null) => report.push(TEXT_REQUIRED),
        Some(Value::String(text)) => {
            if text.trim().is_empty() {
                report.push(TEXT_REQUIRED);
            } else if text.chars().count() > MAX_TEXT_LEN {
                report.push(TEXT_TOO_LONG);
            }
        }
        Some(_) => report.push(TEXT_NOT_STRING),
    }

    // Absent is fine: new records default to not completed.
    if let Some(completed) = fields.get("completed") {
        if !completed.is_boolean() {
            report.push(COMPLETED_NOT_BOOL);
        }
    }

    match fields.get("category") {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => report.push(CATEGORY_NOT_STRING),
    }

    report
}

/// Message for an id already used by an earlier record
pub fn duplicate_id_message(id: u64) -> String {
    format!("duplicate id {}", id)
}

/// `(index, id)` for every record whose numeric id repeats an earlier one
pub fn duplicate_ids(records: &[Value]) -> Vec<(usize, u64)> {
    let mut seen = HashSet::new();
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| record.get("id").and_then(Value::as_u64).map(|id| (idx, id)))
        .filter(|(_, id)| !seen.insert(*id))
        .collect()
}

/// Validate every element of a JSON array, returning `(index, report)` for
/// each invalid element. Repeated ids are reported on the later element.
pub fn validate_all(records: &[Value]) -> Vec<(usize, ValidationReport)> {
    let mut reports: Vec<ValidationReport> = records.iter().map(validate).collect();
    for (idx, id) in duplicate_ids(records) {
        reports[idx].errors.push(duplicate_id_message(id));
    }

    reports
        .into_iter()
        .enumerate()
        .filter(|(_, report)| !report.is_valid())
        .collect()
}
