use super::types::Settings;
use crate::io::paths::PatternbookPaths;
use crate::{PatternbookError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the catalog data source
pub const DATA_ENV_VAR: &str = "PATTERNBOOK_DATA";

/// Configuration loader for `patternbook.yaml`
pub struct ConfigLoader {
    /// Directory searched for a project config file
    project_root: PathBuf,
    /// User-wide config file, if the platform has one
    user_config: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader rooted at the current directory
    pub fn new() -> Self {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let user_config = PatternbookPaths::new()
            .ok()
            .map(|paths| paths.user_config_file());
        Self {
            project_root,
            user_config,
        }
    }

    /// Look for the project config in `project_root` instead
    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = project_root.into();
        self
    }

    /// Use a specific user config file (or none)
    pub fn with_user_config(mut self, user_config: Option<PathBuf>) -> Self {
        self.user_config = user_config;
        self
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Otherwise the project file is tried,
    /// then the user file, then defaults. `PATTERNBOOK_DATA` overrides `data`.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Settings> {
        let mut settings = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(PatternbookError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_file(path)?
            }
            None => self.discover()?,
        };

        if let Ok(data) = std::env::var(DATA_ENV_VAR) {
            if !data.trim().is_empty() {
                tracing::debug!("Using catalog source from {}", DATA_ENV_VAR);
                settings.data = data;
            }
        }

        Ok(settings)
    }

    fn discover(&self) -> Result<Settings> {
        let project_config = PatternbookPaths::project_config_file(&self.project_root);
        if project_config.exists() {
            return Self::load_file(&project_config);
        }

        if let Some(user_config) = &self.user_config {
            if user_config.exists() {
                return Self::load_file(user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Load settings from a YAML file
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PatternbookError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_yaml_ng::from_str(&contents).map_err(|e| {
            PatternbookError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
