//! Error types for todofile

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for todofile
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Not a todofile directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Record not found: {0}")]
    NotFound(u64),

    #[error("Invalid record: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Malformed data file {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate record id {id} in {}", .path.display())]
    DuplicateId { path: PathBuf, id: u64 },

    #[error("Record id space exhausted")]
    IdExhausted,

    #[error("{invalid} of {total} record(s) invalid")]
    CheckFailed { invalid: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TodoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::NotInitialized(_) => 2,
            TodoError::NotFound(_) => 3,
            TodoError::Parse { .. } | TodoError::DuplicateId { .. } => 4,
            TodoError::Validation(_) | TodoError::CheckFailed { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TodoError::NotInitialized(path) => {
                format!(
                    "Not a todofile directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'todofile init' in this directory to create a new list\n\
                    • Navigate to an existing todofile directory\n\
                    • Set TODOFILE_ROOT environment variable to your list path",
                    path.display()
                )
            }
            TodoError::NotFound(id) => {
                format!(
                    "No record with id {}\n\n\
                    Suggestions:\n\
                    • Use 'todofile list' to see existing ids",
                    id
                )
            }
            TodoError::Validation(errors) => {
                let mut msg = String::from("Invalid record:\n");
                for error in errors {
                    msg.push_str(&format!("• {}\n", error));
                }
                msg.push_str("\nText must be non-blank and at most 200 characters.");
                msg
            }
            TodoError::Parse { path, source } => {
                format!(
                    "Malformed data file {}: {}\n\n\
                    Suggestions:\n\
                    • Fix or remove the file by hand\n\
                    • Run 'todofile check' to locate invalid records\n\
                    • Set load_policy to 'lenient' to start from an empty list instead",
                    path.display(),
                    source
                )
            }
            TodoError::DuplicateId { path, id } => {
                format!(
                    "Duplicate record id {} in {}\n\n\
                    Suggestions:\n\
                    • Give each record in the file its own id\n\
                    • Run 'todofile check' to locate the duplicates",
                    id,
                    path.display()
                )
            }
            TodoError::Config(msg) => {
                if msg.contains("Invalid load policy") {
                    format!(
                        "{}\n\n\
                        Valid policies: strict, lenient\n\
                        Example: todofile config load_policy lenient",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TodoError
pub type Result<T> = std::result::Result<T, TodoError>;
