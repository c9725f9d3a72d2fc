//! # Lookout TUI Library
//!
//! Terminal user interface for the Lookout page viewer, built on Ratatui.
//! The sidebar lists one navigation entry per page section; scrolling the
//! content pane highlights the entry for the section currently at the top
//! of the viewport, and activating an entry scrolls the pane to that
//! section with an eased transition.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture: the nav sidebar and the
//! content pane are separate components that handle their own events and
//! rendering, coordinated through a shared `App` state container and a
//! `Msg`/`Effect` update cycle driven by `ui::runtime`.

mod app;
mod theme;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use lookout_types::PageDocument;
use lookout_util::preferences::UserPreferences;

/// Per-run options resolved by the CLI before the TUI starts.
#[derive(Debug, Clone, Default)]
pub struct ViewerOptions {
    /// Theme id for this run; overrides the persisted preference.
    pub theme_override: Option<String>,
    /// Disable the eased scroll transition; nav activation jumps instantly.
    pub plain: bool,
}

/// Runs the main TUI application loop.
///
/// Sets up the terminal, builds the application state from the loaded page
/// document, and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures or event loop runtime
/// issues. Manifest problems are caught by the CLI before this is called.
pub async fn run(document: PageDocument, preferences: Arc<UserPreferences>, options: ViewerOptions) -> Result<()> {
    ui::runtime::run_app(document, preferences, options).await
}
