//! Utility helpers shared across the Lookout crates.

pub mod preferences;
pub mod text;

use std::path::PathBuf;

/// Expands a leading `~/` to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged. Used when resolving
/// user-supplied override paths such as `LOOKOUT_PREFERENCES_PATH`.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs_next::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
