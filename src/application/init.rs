//! Initialize list use case

use crate::error::Result;
use crate::infrastructure::{Config, ListRoot};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Overrides for the default configuration written by `init`
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub data_dir: Option<PathBuf>,
    pub filename: Option<String>,
}

/// Initialize a new list at the specified path.
pub fn init(path: &Path, options: InitOptions) -> Result<Config> {
    let mut config = Config::default();
    if let Some(data_dir) = options.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(filename) = options.filename {
        config.filename = filename;
    }
    // Reject bad values before anything is created on disk
    config.check()?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let root = ListRoot::new(path.to_path_buf());
    root.initialize()?;
    root.save_config(&config)?;

    info!(root = %path.display(), "initialized list");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let config = init(temp.path(), InitOptions::default()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from_dir(temp.path()).unwrap(), config);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("new").join("list");

        init(&target, InitOptions::default()).unwrap();
        assert!(target.join(".todofile/config.toml").exists());
    }

    #[test]
    fn test_init_with_overrides() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions {
            data_dir: Some(PathBuf::from("store")),
            filename: Some("tasks.json".to_string()),
        };

        let config = init(temp.path(), options).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("store"));
        assert_eq!(config.filename, "tasks.json");
    }

    #[test]
    fn test_init_rejects_bad_filename() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions {
            filename: Some("../escape.json".to_string()),
            ..Default::default()
        };

        assert!(matches!(init(temp.path(), options), Err(TodoError::Config(_))));
        assert!(!temp.path().join(".todofile").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), InitOptions::default()).unwrap();
        assert!(init(temp.path(), InitOptions::default()).is_err());
    }
}
