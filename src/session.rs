//! Page session boundary
//!
//! A session selects what to show from the page location, loads the
//! catalog once, and turns every failure into a presentation state. Nothing
//! is retried. Failures are only traced at debug level here; the caller
//! reports the resulting state to the user.

use crate::catalog::{CatalogSource, CatalogStore};
use crate::cursor::StepCursor;
use crate::error::PatternbookError;
use crate::search::FieldSet;
use crate::view::GalleryView;

/// Page that shows a single tutorial
pub const TUTORIAL_PAGE: &str = "working.html";

/// What the page location asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No `id` parameter: the whole gallery
    All,
    /// A single item, by identifier
    Item(String),
}

impl Selection {
    /// Read the `id` query parameter from a location such as
    /// `working.html?id=teddy`.
    ///
    /// Any `id` parameter selects an item, even an empty one, and the first
    /// one wins. Without one, the tutorial page selects the empty id (which
    /// is never found) and every other page selects the gallery.
    pub fn from_location(location: &str) -> Self {
        let without_fragment = location.split('#').next().unwrap_or_default();
        let (page, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key != "id" {
                continue;
            }
            let value = value.replace('+', " ");
            let decoded = match urlencoding::decode(&value) {
                Ok(v) => v.into_owned(),
                Err(_) => value.clone(),
            };
            return Selection::Item(decoded);
        }

        if is_tutorial_page(page) {
            return Selection::Item(String::new());
        }
        Selection::All
    }
}

fn is_tutorial_page(page: &str) -> bool {
    page.rsplit('/')
        .next()
        .is_some_and(|name| name.eq_ignore_ascii_case(TUTORIAL_PAGE))
}

/// What the presentation layer should display for a session
#[derive(Debug)]
pub enum PageState {
    /// Searchable gallery of every item
    Gallery(GalleryView),
    /// Tutorial walker for the selected item
    Tutorial(StepCursor),
    /// The selected identifier is not in the catalog
    NotFound { id: String },
    /// The catalog could not be fetched or parsed
    Unavailable { reason: String },
    /// The selected item has no steps
    Misconfigured { id: String },
}

impl PageState {
    pub fn name(&self) -> &'static str {
        match self {
            PageState::Gallery(_) => "gallery",
            PageState::Tutorial(_) => "tutorial",
            PageState::NotFound { .. } => "not-found",
            PageState::Unavailable { .. } => "unavailable",
            PageState::Misconfigured { .. } => "misconfigured",
        }
    }

    /// Whether this state is a failure of some kind
    pub fn is_error(&self) -> bool {
        !matches!(self, PageState::Gallery(_) | PageState::Tutorial(_))
    }
}

/// One page load
#[derive(Debug, Clone)]
pub struct PageSession {
    source: CatalogSource,
    fields: FieldSet,
}

impl PageSession {
    pub fn new(source: CatalogSource, fields: FieldSet) -> Self {
        Self { source, fields }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Load the catalog and resolve `selection` into a page state
    pub async fn open(&self, selection: &Selection) -> PageState {
        let store = match CatalogStore::load(self.source.clone()).await {
            Ok(store) => store,
            Err(e) => {
                tracing::debug!("Error loading catalog: {}", e);
                return PageState::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        self.resolve(store, selection)
    }

    /// Resolve a selection against an already loaded store
    pub fn resolve(&self, store: CatalogStore, selection: &Selection) -> PageState {
        let id = match selection {
            Selection::All => {
                tracing::debug!("Showing gallery of {} item(s)", store.len());
                return PageState::Gallery(GalleryView::new(store, self.fields.clone()));
            }
            Selection::Item(id) => id,
        };

        let cursor = store
            .find_by_id(id)
            .and_then(StepCursor::new);

        match cursor {
            Ok(cursor) => {
                tracing::debug!(item = %id, steps = cursor.total_steps(), "Opening tutorial");
                PageState::Tutorial(cursor)
            }
            Err(PatternbookError::NotFound(id)) => {
                tracing::debug!("Tutorial '{}' not found", id);
                PageState::NotFound { id }
            }
            Err(PatternbookError::EmptyStepSequence(id)) => {
                tracing::debug!("Tutorial '{}' has no steps", id);
                PageState::Misconfigured { id }
            }
            Err(e) => {
                tracing::debug!("Error loading tutorial: {}", e);
                PageState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
