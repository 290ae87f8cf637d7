//! Patternbook Catalog - loading and lookup of catalog items
//!
//! The catalog is a single static JSON document listing every pattern
//! with its metadata and ordered tutorial steps.
//!
//! # Overview
//!
//! - Load the catalog from a local file or an `http(s)` URL
//! - Resolve a single item by identifier
//! - Hand out shared, immutable items to cursors and views
//!
//! # Architecture
//!
//! ```text
//! data.json (file or URL)
//!     │
//!     ▼
//! CatalogSource::fetch ──► CatalogStore::from_json
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!   search::filter (gallery)              StepCursor (tutorial)
//! ```

mod model;
mod source;
mod store;

pub use model::{CatalogItem, ItemDetails, Step};
pub use source::CatalogSource;
pub use store::CatalogStore;
