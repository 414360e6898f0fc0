//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/com.4studentlives.VC-Brief/
//! - Windows: %APPDATA%/4studentlives/VC Brief/config/
//! - Linux: ~/.config/vcbrief/

use super::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "4studentlives";
const APP_NAME: &str = "VC Brief";
const CONFIG_FILENAME: &str = "settings.toml";

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform config folder, falling back to defaults.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from `path`.
///
/// A missing file gives defaults silently; an unreadable or malformed one
/// gives defaults with a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No settings file found, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path().context("Could not determine settings path")?;
    save_settings_to(&path, settings)
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, content).context("Failed to write settings file")?;
    tracing::info!(path = %path.display(), "Saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let settings = Settings::default();
        assert!(!settings.display.dark_mode);
        assert!(!settings.display.reduced_motion);
        assert!(!settings.intro.always_show);
        assert!(settings.export.last_directory.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[display]\nreduced_motion = true\n").unwrap();
        assert!(settings.display.reduced_motion);
        assert!(!settings.display.dark_mode);
        assert!(settings.splash_options().reduced_motion);
        assert!(!settings.splash_options().always_show);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.intro.always_show = true;
        settings.export.last_directory = Some(dir.path().to_path_buf());

        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "display = [not toml").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_settings_from(&dir.path().join(CONFIG_FILENAME)),
            Settings::default()
        );
    }
}
