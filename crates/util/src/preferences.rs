//! User preference persistence for the Lookout viewer.
//!
//! A tiny JSON-backed store recording lightweight configuration: the
//! preferred theme and whether nav activation scrolls smoothly. The file is
//! written to the standard configuration directory
//! (`~/.config/lookout/preferences.json` on most platforms) and is safe to
//! read/write from multiple threads thanks to the internal `Mutex`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "LOOKOUT_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical identifier of the theme selected in the TUI.
    pub preferred_theme: Option<String>,
    /// Whether nav activation animates the scroll. `None` means unset, which
    /// callers treat as enabled.
    pub smooth_scroll: Option<bool>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Create a store rooted at the default config directory path, loading
    /// any existing payload from disk.
    pub fn new() -> Result<Self, PreferencesError> {
        let resolved_path = default_preferences_path();
        let payload = load_payload(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory
    /// cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the canonical identifier of the preferred theme, if one was saved.
    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").preferred_theme.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        payload.preferred_theme = theme_id;
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    /// Returns the saved smooth-scroll toggle, if any.
    pub fn smooth_scroll(&self) -> Option<bool> {
        self.payload.lock().expect("preferences lock poisoned").smooth_scroll
    }

    /// Persist the smooth-scroll toggle.
    pub fn set_smooth_scroll(&self, enabled: Option<bool>) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        payload.smooth_scroll = enabled;
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lookout")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    if !path.exists() {
        return Ok(PreferencesPayload::default());
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(PreferencesPayload::default());
    }
    match serde_json::from_str(&data) {
        Ok(payload) => Ok(payload),
        // Preferences are a convenience; a mangled file must not block startup.
        Err(error) => {
            warn!("ignoring unreadable preferences file {}: {error}", path.display());
            Ok(PreferencesPayload::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(path: PathBuf) -> UserPreferences {
        UserPreferences {
            payload: Mutex::new(load_payload(&path).expect("load payload")),
            path,
            persist_to_disk: true,
        }
    }

    #[test]
    fn round_trips_theme_and_smooth_scroll() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);

        let store = store_at(path.clone());
        store.set_preferred_theme(Some("paper".into())).expect("save theme");
        store.set_smooth_scroll(Some(false)).expect("save smooth scroll");

        let reloaded = store_at(path);
        assert_eq!(reloaded.preferred_theme().as_deref(), Some("paper"));
        assert_eq!(reloaded.smooth_scroll(), Some(false));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_at(dir.path().join("nope").join(PREFERENCES_FILE_NAME));
        assert_eq!(store.preferred_theme(), None);
        assert_eq!(store.smooth_scroll(), None);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{ not json").expect("write corrupt payload");

        let store = store_at(path);
        assert_eq!(store.preferred_theme(), None);
        assert_eq!(store.smooth_scroll(), None);
    }

    #[test]
    fn env_override_wins_over_default_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let override_path = dir.path().join("custom-prefs.json");
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(override_path.to_str().unwrap()), || {
            assert_eq!(default_preferences_path(), override_path);
        });
    }

    #[test]
    fn blank_env_override_is_ignored() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("  "), || {
            let path = default_preferences_path();
            assert!(path.ends_with(Path::new("lookout").join(PREFERENCES_FILE_NAME)));
        });
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let store = UserPreferences::ephemeral();
        store.set_preferred_theme(Some("midnight".into())).expect("set theme");
        assert_eq!(store.preferred_theme().as_deref(), Some("midnight"));
        assert_eq!(store.path(), Path::new(""));
    }
}
