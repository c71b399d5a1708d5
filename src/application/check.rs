//! Check a data file use case

use crate::domain::validation::{validate_all, ValidationReport};
use crate::error::{TodoError, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Result of checking every element of a JSON array file
#[derive(Debug, Clone, Default)]
pub struct CheckSummary {
    pub total: usize,
    pub invalid: Vec<(usize, ValidationReport)>,
}

impl CheckSummary {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// All messages, flattened as `(index, message)`
    pub fn messages(&self) -> Vec<(usize, String)> {
        self.invalid
            .iter()
            .flat_map(|(idx, report)| report.errors.iter().map(move |e| (*idx, e.clone())))
            .collect()
    }
}

/// Validate every record in the JSON array at `path`.
/// A missing file checks as an empty collection.
pub fn check_file(path: &Path) -> Result<CheckSummary> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CheckSummary::default()),
        Err(e) => return Err(TodoError::Io(e)),
    };

    if contents.trim().is_empty() {
        return Ok(CheckSummary::default());
    }

    let values: Vec<Value> = serde_json::from_str(&contents).map_err(|source| TodoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(CheckSummary {
        total: values.len(),
        invalid: validate_all(&values),
    })
}
