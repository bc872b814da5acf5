// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Settings that survive between sessions: the last algorithm, speed, and bar count.
//! Stored as JSON in `<config_dir>/sortviz/settings.json`.

use std::{fmt::{Display, Formatter, Result},
          fs,
          path::{Path, PathBuf}};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::{Algorithm, BAR_COUNT_RANGE, CommonResult, DEBUG_APP_MOD, SessionOptions,
            SortVizError, Speed};

pub enum ConfigPaths {
    SortVizTopLevelFolderName,
    SettingsFile,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::SortVizTopLevelFolderName => "sortviz",
            ConfigPaths::SettingsFile => "settings.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the config folder is. [None] if the OS doesn't have one.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::SortVizTopLevelFolderName.to_string()))
}

/// This is where the settings file is stored, inside `config_folder`.
#[must_use]
pub fn get_settings_file_path(config_folder: &Path) -> PathBuf {
    config_folder.join(ConfigPaths::SettingsFile.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub algorithm: Algorithm,
    /// Clamped into range on load, by [Speed]'s own deserializer.
    pub speed: Speed,
    pub bar_count: usize,
}

impl Default for Settings {
    fn default() -> Self { SessionOptions::default().into() }
}

impl From<SessionOptions> for Settings {
    fn from(options: SessionOptions) -> Self {
        Self {
            algorithm: options.algorithm,
            speed: options.speed,
            bar_count: options.bar_count,
        }
    }
}

impl From<Settings> for SessionOptions {
    fn from(settings: Settings) -> Self {
        Self {
            algorithm: settings.algorithm,
            speed: settings.speed,
            bar_count: settings.bar_count,
        }
    }
}

impl Settings {
    /// Loads the settings file from `config_folder`. A missing file is not an error, it
    /// just means defaults. A bar count that was edited out of range is clamped.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::SettingsIo`] if the file exists but can't be read, and
    /// [`SortVizError::SettingsParse`] if it isn't valid.
    pub fn try_load(config_folder: &Path) -> CommonResult<Self> {
        let file_path = get_settings_file_path(config_folder);
        if !file_path.exists() {
            DEBUG_APP_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "No settings file, using defaults.",
                    file_path = ?file_path
                );
            });
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&file_path).map_err(|source| {
            SortVizError::SettingsIo {
                path: file_path.display().to_string(),
                source,
            }
        })?;
        let settings: Self = serde_json::from_str(&content).map_err(|source| {
            SortVizError::SettingsParse {
                path: file_path.display().to_string(),
                source,
            }
        })?;

        Ok(settings.clamped())
    }

    /// Writes the settings file, creating `config_folder` if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SortVizError::SettingsIo`] if the folder or the file can't be written.
    pub fn try_save(&self, config_folder: &Path) -> CommonResult<()> {
        fs::create_dir_all(config_folder).map_err(|source| SortVizError::SettingsIo {
            path: config_folder.display().to_string(),
            source,
        })?;

        let file_path = get_settings_file_path(config_folder);
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            SortVizError::SettingsParse {
                path: file_path.display().to_string(),
                source,
            }
        })?;
        fs::write(&file_path, content).map_err(|source| SortVizError::SettingsIo {
            path: file_path.display().to_string(),
            source,
        })?;

        DEBUG_APP_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Saved settings.", file_path = ?file_path, settings = ?self);
        });
        Ok(())
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            bar_count: self
                .bar_count
                .clamp(*BAR_COUNT_RANGE.start(), *BAR_COUNT_RANGE.end()),
            ..self
        }
    }
}

/// Resolves where settings live for this launch. [None] means don't persist anything,
/// either because `--no-config` was given or the OS has no config folder.
#[must_use]
pub fn resolve_config_folder(no_config: bool) -> Option<PathBuf> {
    if no_config {
        return None;
    }
    let maybe_folder = try_get_config_folder_path();
    if maybe_folder.is_none() {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "Settings won't be saved.",
            error = %SortVizError::ConfigFolderUnavailable
        );
    }
    maybe_folder
}

/// [`Settings::try_load`] that falls back to defaults (and logs) on any error, since a
/// broken settings file should never keep the app from starting.
#[must_use]
pub fn load_or_default(maybe_config_folder: Option<&Path>) -> Settings {
    let Some(config_folder) = maybe_config_folder else {
        return Settings::default();
    };
    Settings::try_load(config_folder).unwrap_or_else(|report| {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not load settings, using defaults.", error = ?report);
        Settings::default()
    })
}
