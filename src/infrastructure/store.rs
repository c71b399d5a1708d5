//! File-backed record store
//!
//! The whole collection lives in one JSON array file. Every save rewrites
//! the file in full through a temp file and rename, so a reader sees either
//! the previous or the new collection, never a partial write. There is no
//! locking: concurrent writers resolve as last write wins.

use crate::domain::{first_duplicate_id, Record};
use crate::error::{TodoError, Result};
use crate::infrastructure::LoadPolicy;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Abstract persistence for a record collection
pub trait RecordStore {
    /// Path of the backing file
    fn path(&self) -> &Path;

    /// Load the full collection. A missing backing file is an empty collection.
    /// Ids are unique in every collection returned.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted collection with `records`
    fn save(&self, records: &[Record]) -> Result<()>;

    /// Check whether the backing file exists
    fn exists(&self) -> bool {
        self.path().is_file()
    }
}

/// JSON file implementation of RecordStore
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    policy: LoadPolicy,
}

impl JsonFileStore {
    /// Create a store for the given backing file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    /// Create a store at `data_dir/filename`
    pub fn in_dir(data_dir: impl AsRef<Path>, filename: &str) -> Self {
        Self::new(data_dir.as_ref().join(filename))
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Read and parse the backing file. `Ok(None)` means the file is missing.
    fn read_strict(&self) -> Result<Option<Vec<Record>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TodoError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }

        let records: Vec<Record> =
            serde_json::from_str(&contents).map_err(|source| TodoError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if let Some(id) = first_duplicate_id(&records) {
            return Err(TodoError::DuplicateId {
                path: self.path.clone(),
                id,
            });
        }

        Ok(Some(records))
    }

    fn temp_path(&self) -> PathBuf {
        let tmp_name = format!(
            ".{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("records.json"),
            std::process::id()
        );
        self.path.with_file_name(tmp_name)
    }
}

impl RecordStore for JsonFileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Record>> {
        match self.read_strict() {
            Ok(Some(records)) => {
                debug!(path = %self.path.display(), count = records.len(), "loaded records");
                Ok(records)
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "backing file missing, starting empty");
                Ok(Vec::new())
            }
            Err(e) => match self.policy {
                LoadPolicy::Strict => Err(e),
                LoadPolicy::Lenient => {
                    warn!(path = %self.path.display(), error = %e, "ignoring unusable backing file");
                    Ok(Vec::new())
                }
            },
        }
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(records)?;
        contents.push('\n');

        let tmp_path = self.temp_path();
        if let Err(e) = fs::write(&tmp_path, &contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TodoError::Io(e));
        }

        // rename replaces the destination on both Unix and Windows
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TodoError::Io(e));
        }

        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}
