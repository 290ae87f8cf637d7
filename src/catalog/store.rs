//! Read-only catalog store

use std::collections::HashSet;
use std::sync::Arc;

use super::{CatalogItem, CatalogSource};
use crate::error::{PatternbookError, Result};

/// Immutable in-memory list of catalog items for one session
#[derive(Debug, Clone)]
pub struct CatalogStore {
    source: Option<CatalogSource>,
    items: Vec<Arc<CatalogItem>>,
}

impl CatalogStore {
    /// Fetch and parse the catalog.
    ///
    /// Any fetch or parse failure is reported as `DataUnavailable`.
    pub async fn load(source: CatalogSource) -> Result<Self> {
        let content = source.fetch().await?;
        let mut store = Self::from_json(&source.origin(), &content)?;
        store.source = Some(source);
        Ok(store)
    }

    /// Parse a catalog document.
    ///
    /// `origin` only labels errors. Duplicate identifiers are rejected.
    pub fn from_json(origin: &str, content: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(content)
            .map_err(|e| PatternbookError::unavailable(origin, format!("invalid catalog JSON: {e}")))?;

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(PatternbookError::unavailable(
                    origin,
                    format!("duplicate item id '{}'", item.id),
                ));
            }
        }

        tracing::debug!("Loaded {} catalog item(s) from {}", items.len(), origin);

        Ok(Self {
            source: None,
            items: items.into_iter().map(Arc::new).collect(),
        })
    }

    /// All items in catalog order
    pub fn items(&self) -> &[Arc<CatalogItem>] {
        &self.items
    }

    /// Resolve an item by identifier
    pub fn find_by_id(&self, id: &str) -> Result<Arc<CatalogItem>> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| PatternbookError::NotFound(id.to_string()))
    }

    /// Source the store was loaded from, if any
    pub fn source(&self) -> Option<&CatalogSource> {
        self.source.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
