use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::prelude::*;

/// User-visible display preferences. Held in memory by the owning screen
/// controller and persisted through a [`SettingsStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_theme: bool,
    pub use_dynamic_color: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            use_dynamic_color: true,
        }
    }
}

impl AppSettings {
    pub fn toggle_dark_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        self.dark_theme
    }

    pub fn toggle_dynamic_color(&mut self) -> bool {
        self.use_dynamic_color = !self.use_dynamic_color;
        self.use_dynamic_color
    }
}

/// JSON-file persistence for [`AppSettings`]. Loading degrades to the
/// defaults on any failure; only saving reports errors to the caller.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform config location, e.g.
    /// `~/.config/rental-catalog/settings.json` on Linux.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|directory| directory.join(constants::APP_NAME).join("settings.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn load(&self) -> AppSettings {
        let Ok(payload) = fs::read_to_string(&self.path) else {
            return AppSettings::default();
        };

        serde_json::from_str(&payload).unwrap_or_else(|error| {
            tracing::warn!(%error, "discarding undecodable settings file");
            AppSettings::default()
        })
    }

    pub fn save(&self, settings: AppSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let payload = serde_json::to_string_pretty(&settings)?;
        fs::write(&self.path, payload)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
