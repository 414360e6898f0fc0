//! User settings for the VC Brief desktop app.
//!
//! - Display preferences (dark mode, reduced motion)
//! - Intro behaviour (replay on every launch)
//! - Export defaults (last folder used for the newsletter PDF)

mod persistence;

pub use persistence::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use vcb_core::SplashOptions;

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub intro: IntroSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Shortens the intro reveal and turns off the starfield.
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroSettings {
    /// Play the intro even if it was already seen this session.
    pub always_show: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Folder the save dialog opens in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,
}

impl Settings {
    pub fn splash_options(&self) -> SplashOptions {
        SplashOptions {
            reduced_motion: self.display.reduced_motion,
            always_show: self.intro.always_show,
        }
    }
}
