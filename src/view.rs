//! Plain data handed to the presentation layer
//!
//! Nothing here renders; the CLI and TUI read these values and decide how to
//! show them.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, CatalogStore};
use crate::media::MediaKind;
use crate::search::{self, FieldSet};

/// One card in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryRow {
    pub id: String,
    pub name: String,
    pub difficulty: String,
    pub category: String,
    pub image: String,
    pub time: String,
}

impl From<&CatalogItem> for GalleryRow {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            difficulty: item.difficulty.clone(),
            category: item.category.clone(),
            image: item.image.clone(),
            time: item.details.time.clone(),
        }
    }
}

/// Gallery page: the loaded catalog plus the fields its search box covers
#[derive(Debug, Clone)]
pub struct GalleryView {
    store: CatalogStore,
    fields: FieldSet,
}

impl GalleryView {
    pub fn new(store: CatalogStore, fields: FieldSet) -> Self {
        Self { store, fields }
    }

    /// Every row, unfiltered
    pub fn rows(&self) -> Vec<GalleryRow> {
        self.filter("")
    }

    /// Rows matching `query`, in catalog order
    pub fn filter(&self, query: &str) -> Vec<GalleryRow> {
        search::filter(query, self.store.items(), &self.fields)
            .into_iter()
            .map(|item| GalleryRow::from(&**item))
            .collect()
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }
}

/// Detail view of a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: String,
    pub name: String,
    pub difficulty: String,
    pub category: String,
    pub image: String,
    pub time: String,
    pub materials: Vec<String>,
    pub tools: Vec<String>,
    pub techniques: Vec<String>,
    pub step_count: usize,
}

impl From<&CatalogItem> for ItemDetail {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            difficulty: item.difficulty.clone(),
            category: item.category.clone(),
            image: item.image.clone(),
            time: item.details.time.clone(),
            materials: item.details.materials.clone(),
            tools: item.details.tools.clone(),
            techniques: item.details.techniques.clone(),
            step_count: item.step_count(),
        }
    }
}

/// Everything the tutorial view shows for the current step.
///
/// Recomputed from the cursor after every transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialSnapshot {
    pub item_id: String,
    pub title: String,
    pub step_label: usize,
    pub total_steps: usize,
    pub instruction_text: String,
    pub detail_text: String,
    pub resolved_media: String,
    pub media_kind: MediaKind,
    pub percent_complete: f64,
    pub is_final: bool,
    pub can_retreat: bool,
    pub forward_label: String,
}

impl TutorialSnapshot {
    /// "Step 2 of 5"
    pub fn step_count_text(&self) -> String {
        format!("Step {} of {}", self.step_label, self.total_steps)
    }
}
