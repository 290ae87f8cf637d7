pub mod catalog;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod error;
pub mod io;
pub mod media;
pub mod search;
pub mod session;
pub mod view;

pub use catalog::{CatalogItem, CatalogSource, CatalogStore, ItemDetails, Step};
pub use cursor::{Advance, StepCursor};
pub use error::{PatternbookError, Result};
pub use media::{MediaKind, MediaRef};
pub use search::{FieldSet, SearchField};
pub use session::{PageSession, PageState, Selection};
pub use view::{GalleryRow, GalleryView, ItemDetail, TutorialSnapshot};
