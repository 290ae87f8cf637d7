/// Interactive gallery and tutorial browser
pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use crate::Result;

/// Entry point for the browser
pub async fn run(app: app::App) -> Result<()> {
    app.run().await
}
