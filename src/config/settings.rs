// src/config/settings.rs
//! The two remembered preferences: last directory and last volume.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name of the settings store inside the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Persisted preferences. Both keys are absent on first run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,
    /// Volume as a percentage, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_volume: Option<u8>,
}

impl Settings {
    /// Remembered volume in `[0, 1]`, defaulting to full volume.
    pub fn volume(&self) -> f32 {
        f32::from(self.last_volume.unwrap_or(100).min(100)) / 100.0
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.last_volume = Some((volume.clamp(0.0, 1.0) * 100.0).round() as u8);
    }
}

/// JSON-file backed settings store.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at `<dir>/settings.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults if the file is missing or
    /// unreadable.
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            log::info!("no settings at {}, using defaults", self.path.display());
            return Settings::default();
        }
        match self.try_load() {
            Ok(mut settings) => {
                settings.last_volume = settings.last_volume.map(|v| v.min(100));
                settings
            }
            Err(e) => {
                log::warn!("ignoring settings: {e:#}");
                Settings::default()
            }
        }
    }

    fn try_load(&self) -> Result<Settings> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }

    /// Write settings, creating the directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::info!("saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());

        assert_eq!(store.load(), Settings::default());
        assert_eq!(Settings::default().volume(), 1.0);
    }

    #[test]
    fn saves_with_camel_case_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(&dir.path().join("nested"));
        let mut settings = Settings {
            last_directory: Some(PathBuf::from("/music/jazz")),
            last_volume: None,
        };
        settings.set_volume(0.456);

        store.save(&settings).expect("save");
        let raw = fs::read_to_string(store.path()).expect("read");
        let json: serde_json::Value = serde_json::from_str(&raw).expect("json");

        assert_eq!(json["lastDirectory"], "/music/jazz");
        assert_eq!(json["lastVolume"], 46);
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());
        fs::write(store.path(), "{ not json").expect("write");

        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn out_of_range_volume_is_clamped_on_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());
        fs::write(store.path(), r#"{"lastVolume": 250}"#).expect("write");

        let settings = store.load();
        assert_eq!(settings.last_volume, Some(100));
        assert_eq!(settings.last_directory, None);
        assert_eq!(settings.volume(), 1.0);
    }

    #[test]
    fn set_volume_clamps_to_percent() {
        let mut settings = Settings::default();
        settings.set_volume(1.7);
        assert_eq!(settings.last_volume, Some(100));
        settings.set_volume(-1.0);
        assert_eq!(settings.last_volume, Some(0));
        assert_eq!(settings.volume(), 0.0);
    }
}
