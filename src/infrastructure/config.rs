//! Configuration management

use crate::error::{TodoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_DIR: &str = ".todofile";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_FILENAME: &str = "todos.json";

/// How `load` treats a backing file that exists but cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Unreadable or malformed files are errors
    #[default]
    Strict,
    /// Unreadable or malformed files load as an empty collection
    Lenient,
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(LoadPolicy::Strict),
            "lenient" => Ok(LoadPolicy::Lenient),
            _ => Err(format!(
                "Invalid load policy: '{}'. Valid policies are: strict, lenient",
                s
            )),
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPolicy::Strict => write!(f, "strict"),
            LoadPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base data directory, relative to the list root unless absolute
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default)]
    pub load_policy: LoadPolicy,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            filename: default_filename(),
            load_policy: LoadPolicy::default(),
        }
    }
}

impl Config {
    /// Load config from .todofile/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TodoError::NotInitialized(path.to_path_buf())
            } else {
                TodoError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TodoError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Save config to .todofile/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        self.check()?;

        let config_dir = path.join(CONFIG_DIR);
        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Reject values that cannot name a backing file
    pub fn check(&self) -> Result<()> {
        validate_filename(&self.filename)?;
        if self.data_dir.as_os_str().is_empty() {
            return Err(TodoError::Config("data_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Resolve the backing file path for a list rooted at `root`.
    /// `TODOFILE_DATA_DIR` overrides the configured data directory.
    pub fn data_file(&self, root: &Path) -> PathBuf {
        let data_dir = std::env::var_os("TODOFILE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir.clone());
        root.join(data_dir).join(&self.filename)
    }
}

/// A backing filename must be a single, non-empty path component
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        return Err(TodoError::Config("filename must not be empty".to_string()));
    }
    if filename.contains('/') || filename.contains('\\') || filename == "." || filename == ".."
    {
        return Err(TodoError::Config(format!(
            "filename must be a plain file name, got '{}'",
            filename
        )));
    }
    Ok(())
}
