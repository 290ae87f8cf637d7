//! Catalog data model
//!
//! Mirrors the JSON schema of the data file. Only `id`, `name` and `steps`
//! are required; presentation fields fall back to empty values.

use serde::{Deserialize, Serialize};

/// One pattern entry in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier, used in `?id=` selections
    pub id: String,

    /// Display name
    pub name: String,

    /// Difficulty label (e.g. "Beginner")
    #[serde(default)]
    pub difficulty: String,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Primary image, also the fallback media for steps
    #[serde(default)]
    pub image: String,

    /// Time and supply information
    #[serde(default)]
    pub details: ItemDetails,

    /// Ordered tutorial steps
    pub steps: Vec<Step>,
}

/// Supplementary item metadata shown on the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub materials: Vec<String>,

    #[serde(default)]
    pub tools: Vec<String>,

    #[serde(default)]
    pub techniques: Vec<String>,
}

/// A single instructional step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Instruction headline
    pub text: String,

    /// Supplementary detail text
    #[serde(default)]
    pub detail: String,

    /// Optional image or video path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl CatalogItem {
    /// Number of tutorial steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl AsRef<CatalogItem> for CatalogItem {
    fn as_ref(&self) -> &CatalogItem {
        self
    }
}

impl Step {
    /// Step media, treating an empty or blank path as absent
    pub fn media(&self) -> Option<&str> {
        self.media
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }
}
