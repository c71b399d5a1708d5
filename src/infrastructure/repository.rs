//! List root discovery and layout

use crate::error::{TodoError, Result};
use crate::infrastructure::config::CONFIG_DIR;
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A directory holding a `.todofile/` config directory
#[derive(Debug, Clone)]
pub struct ListRoot {
    pub root: PathBuf,
}

impl ListRoot {
    /// Create a list root for the given directory
    pub fn new(root: PathBuf) -> Self {
        ListRoot { root }
    }

    /// Discover the list root.
    /// First checks TODOFILE_ROOT environment variable, then walks up from
    /// the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TODOFILE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                debug!(root = %path.display(), "using TODOFILE_ROOT");
                return Ok(ListRoot::new(path));
            } else {
                return Err(TodoError::Config(format!(
                    "TODOFILE_ROOT is set to '{}' but no .todofile directory found. \
                    Run 'todofile init' in that directory or unset TODOFILE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the list root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                debug!(root = %current.display(), "discovered list root");
                return Ok(ListRoot::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TodoError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    /// Create the .todofile directory. Fails if it already exists.
    pub fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(TodoError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Open the record store configured for this root
    pub fn open_store(&self) -> Result<JsonFileStore> {
        let config = self.load_config()?;
        Ok(JsonFileStore::new(config.data_file(&self.root)).with_policy(config.load_policy))
    }
}
