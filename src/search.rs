//! Gallery search filter
//!
//! Matches a query against a configurable set of item fields
//! (case-insensitive substring). Input order is preserved.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::CatalogItem;

/// Item field a search query can match against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Id,
    Name,
    Difficulty,
    Category,
    Time,
    Materials,
    Tools,
    Techniques,
}

impl SearchField {
    /// Whether any value of this field on `item` contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    fn matches(&self, item: &CatalogItem, needle: &str) -> bool {
        let contains = |value: &str| value.to_lowercase().contains(needle);
        match self {
            SearchField::Id => contains(&item.id),
            SearchField::Name => contains(&item.name),
            SearchField::Difficulty => contains(&item.difficulty),
            SearchField::Category => contains(&item.category),
            SearchField::Time => contains(&item.details.time),
            SearchField::Materials => item.details.materials.iter().any(|v| contains(v)),
            SearchField::Tools => item.details.tools.iter().any(|v| contains(v)),
            SearchField::Techniques => item.details.techniques.iter().any(|v| contains(v)),
        }
    }
}

/// Set of fields searched by the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet(BTreeSet<SearchField>);

impl FieldSet {
    pub fn new(fields: impl IntoIterator<Item = SearchField>) -> Self {
        Self(fields.into_iter().collect())
    }

    /// Every searchable field
    pub fn all() -> Self {
        Self::new(SearchField::value_variants().iter().copied())
    }

    pub fn contains(&self, field: SearchField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SearchField> + '_ {
        self.0.iter().copied()
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new([SearchField::Name])
    }
}

/// Filter items by query.
///
/// An empty (or blank) query returns every item. Otherwise an item is kept
/// when the lower-cased query is a substring of any selected field.
pub fn filter<'a, T: AsRef<CatalogItem>>(query: &str, items: &'a [T], fields: &FieldSet) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            let item: &CatalogItem = (*item).as_ref();
            fields.iter().any(|f| f.matches(item, &needle))
        })
        .collect()
}
