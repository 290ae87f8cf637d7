use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternbookError {
    #[error("Catalog data unavailable from {origin}: {reason}")]
    DataUnavailable { origin: String, reason: String },

    #[error("No catalog item with id '{0}'")]
    NotFound(String),

    #[error("Catalog item '{0}' has no steps")]
    EmptyStepSequence(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl PatternbookError {
    pub(crate) fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        PatternbookError::DataUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternbookError>;
