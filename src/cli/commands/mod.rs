pub mod gallery;
pub mod open;
pub mod show;
pub mod walk;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::catalog::CatalogSource;
use crate::config::{ConfigLoader, Settings};
use crate::session::PageSession;
use crate::Result;

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Error with message
    Error(String),
    /// Warning with message
    Warning(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Error(_) => 1,
            CommandResult::Warning(_) => 0,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::Error(msg) => Some(msg),
            CommandResult::Warning(msg) => Some(msg),
        }
    }
}

/// Settings and catalog source shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub settings: Settings,
    pub source: CatalogSource,
}

impl CommandContext {
    /// Resolve settings from the config file, environment and `--data`
    pub fn resolve(data: Option<&str>, config: Option<&PathBuf>) -> Result<Self> {
        let mut settings = ConfigLoader::new().load(config.map(|p| p.as_path()))?;
        if let Some(data) = data {
            settings.data = data.to_string();
        }
        let source = settings.data.parse()?;
        tracing::debug!("Catalog source: {}", source);
        Ok(Self { settings, source })
    }

    /// Build a context directly, without reading any config
    pub fn with_source(source: CatalogSource) -> Self {
        Self {
            settings: Settings::default(),
            source,
        }
    }

    pub fn session(&self) -> PageSession {
        PageSession::new(self.source.clone(), self.settings.field_set())
    }
}
