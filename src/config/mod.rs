pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, DATA_ENV_VAR};
pub use types::{Settings, DEFAULT_DATA_SOURCE};
