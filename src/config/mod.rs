// src/config/mod.rs
//! Configuration module - settings store location and persistence.

pub mod settings;

use std::path::PathBuf;

pub use settings::{Settings, SettingsStore};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TAPEDECK_CONFIG_DIR";

/// Resolve the config directory from an override and a home directory.
pub fn resolve_config_dir(override_dir: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(dir);
    }
    match home.filter(|v| !v.trim().is_empty()) {
        Some(home) => PathBuf::from(home).join(".config").join("tapedeck"),
        None => PathBuf::from("."),
    }
}

/// Directory holding `settings.json` and the log file.
pub fn config_dir() -> PathBuf {
    resolve_config_dir(
        std::env::var(CONFIG_DIR_ENV).ok().as_deref(),
        std::env::var("HOME").ok().as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_home() {
        assert_eq!(
            resolve_config_dir(Some("/tmp/deck"), Some("/home/ana")),
            PathBuf::from("/tmp/deck")
        );
    }

    #[test]
    fn falls_back_to_home_then_cwd() {
        assert_eq!(
            resolve_config_dir(Some("  "), Some("/home/ana")),
            PathBuf::from("/home/ana/.config/tapedeck")
        );
        assert_eq!(resolve_config_dir(None, None), PathBuf::from("."));
    }
}
