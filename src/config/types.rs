use serde::{Deserialize, Serialize};

use crate::search::{FieldSet, SearchField};

/// Default catalog data file, relative to the working directory
pub const DEFAULT_DATA_SOURCE: &str = "data.json";

/// Settings read from `patternbook.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Catalog data file path or URL
    #[serde(default = "default_data")]
    pub data: String,

    /// Fields the gallery search box matches against
    #[serde(default = "default_search_fields")]
    pub search_fields: Vec<SearchField>,
}

impl Settings {
    pub fn field_set(&self) -> FieldSet {
        FieldSet::new(self.search_fields.iter().copied())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: default_data(),
            search_fields: default_search_fields(),
        }
    }
}

fn default_data() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

fn default_search_fields() -> Vec<SearchField> {
    vec![SearchField::Name]
}
