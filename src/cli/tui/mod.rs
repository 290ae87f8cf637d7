/// Terminal User Interface module for interactive commands
pub mod browser;

use crate::cursor::StepCursor;
use crate::view::GalleryView;
use crate::Result;

/// Run the interactive gallery browser
pub async fn run_browser(gallery: GalleryView) -> Result<()> {
    browser::run(browser::app::App::with_gallery(gallery)).await
}

/// Run the tutorial walker for a single item
pub async fn run_walker(cursor: StepCursor) -> Result<()> {
    browser::run(browser::app::App::with_tutorial(cursor)).await
}
