use crate::{PatternbookError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file
pub const PROJECT_CONFIG_FILE: &str = "patternbook.yaml";

/// Path management for Patternbook configuration files
#[derive(Debug, Clone)]
pub struct PatternbookPaths {
    /// User configuration directory
    pub config_dir: PathBuf,
}

impl PatternbookPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "patternbook").ok_or_else(|| {
            PatternbookError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// User-wide configuration file
    pub fn user_config_file(&self) -> PathBuf {
        self.config_dir.join("config.yaml")
    }

    /// Project configuration file inside `project_root`
    pub fn project_config_file(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }
}
