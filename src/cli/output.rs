//! Output formatting utilities

use crate::application::CheckSummary;
use crate::domain::Record;

/// Format a single record as one list line
pub fn format_record(record: &Record) -> String {
    let mark = if record.completed { "x" } else { " " };
    match &record.category {
        Some(category) => format!("{:>4}  [{}] {}  @{}", record.id, mark, record.text, category),
        None => format!("{:>4}  [{}] {}", record.id, mark, record.text),
    }
}

/// Format a list of records for display
pub fn format_record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format_record(record));
        output.push('\n');
    }
    output
}

/// Format the outcome of `check`
pub fn format_check_summary(summary: &CheckSummary) -> String {
    if summary.is_valid() {
        return format!("{} record(s) valid", summary.total);
    }

    let mut output = String::new();
    for (idx, message) in summary.messages() {
        output.push_str(&format!("#{}: {}\n", idx, message));
    }
    output.push_str(&format!(
        "{} of {} record(s) invalid",
        summary.invalid.len(),
        summary.total
    ));
    output
}
