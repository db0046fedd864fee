//! User settings.
//!
//! Settings are read from `settings.json` in the platform config directory.
//! The file is optional and only ever read; notes themselves are never
//! written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::board::Placement;
use crate::constants::{
    DEFAULT_DRAG_MARGIN_X, DEFAULT_DRAG_MARGIN_Y, NOTE_BASE_ORIGIN, NOTE_STAGGER_SLOTS,
    NOTE_STAGGER_STEP,
};
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "spooky-notes";
const SETTINGS_FILE: &str = "settings.json";

/// Path of the settings file, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Distance kept between a dragged note's top-left and the right/bottom
    /// edges of the board (x, y)
    pub drag_margin: (f32, f32),
    /// Where the first created note lands
    pub note_origin: (f32, f32),
    /// Diagonal offset between consecutively created notes
    pub stagger_step: f32,
    /// Number of stagger positions before wrapping to the origin
    pub stagger_slots: usize,
    /// Start with the welcome and candy-list notes
    pub seed_welcome_notes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drag_margin: (DEFAULT_DRAG_MARGIN_X, DEFAULT_DRAG_MARGIN_Y),
            note_origin: NOTE_BASE_ORIGIN,
            stagger_step: NOTE_STAGGER_STEP,
            stagger_slots: NOTE_STAGGER_SLOTS,
            seed_welcome_notes: true,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), "Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from `path`.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let (mx, my) = self.drag_margin;
        if !mx.is_finite() || !my.is_finite() || mx < 0.0 || my < 0.0 {
            return Err(SettingsError::Invalid {
                field: "drag_margin",
                reason: format!("expected finite non-negative values, got ({mx}, {my})"),
            });
        }
        if !self.stagger_step.is_finite() {
            return Err(SettingsError::Invalid {
                field: "stagger_step",
                reason: format!("expected a finite value, got {}", self.stagger_step),
            });
        }
        if !self.note_origin.0.is_finite() || !self.note_origin.1.is_finite() {
            return Err(SettingsError::Invalid {
                field: "note_origin",
                reason: "expected finite coordinates".to_string(),
            });
        }
        if self.stagger_slots == 0 {
            return Err(SettingsError::Invalid {
                field: "stagger_slots",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn placement(&self) -> Placement {
        Placement {
            origin: self.note_origin,
            step: self.stagger_step,
            slots: self.stagger_slots,
        }
    }
}
