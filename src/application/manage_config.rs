//! Config management use case

use crate::error::{TodoError, Result};
use crate::infrastructure::{Config, ListRoot, LoadPolicy};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for managing list configuration
pub struct ConfigService {
    root: ListRoot,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(root: ListRoot) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.root.load_config()?;

        match key {
            "data_dir" => Ok(config.data_dir.display().to_string()),
            "filename" => Ok(config.filename),
            "load_policy" => Ok(config.load_policy.to_string()),
            _ => Err(TodoError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: data_dir, filename, load_policy",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.root.load_config()?;

        match key {
            "data_dir" => config.data_dir = PathBuf::from(value),
            "filename" => config.filename = value.to_string(),
            "load_policy" => {
                config.load_policy = LoadPolicy::from_str(value).map_err(TodoError::Config)?;
            }
            _ => {
                return Err(TodoError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_dir, filename, load_policy",
                    key
                )));
            }
        }

        self.root.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.root.load_config()
    }
}
