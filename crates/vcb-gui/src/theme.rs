//! Theme and styling constants

use egui::{Color32, Visuals};
use vcb_report::palette::{self, Rgb8};

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub const fn color(rgb: Rgb8) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Brand colors, shared with the newsletter palette.
pub mod colors {
    use super::{color, palette};
    use egui::Color32;

    pub const NAVY: Color32 = color(palette::SECONDARY);
    pub const MIDNIGHT: Color32 = color(palette::PRIMARY);
    pub const GOLD: Color32 = color(palette::ACCENT);
    pub const TEAL: Color32 = color(palette::TEAL);
    pub const SUCCESS: Color32 = color(palette::GREEN);
    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
    /// Lower half of the intro backdrop.
    pub const GROUND: Color32 = Color32::from_rgb(23, 29, 26);
}

pub fn visuals(dark_mode: bool) -> Visuals {
    let mut visuals = if dark_mode {
        let mut dark = Visuals::dark();
        dark.panel_fill = colors::MIDNIGHT;
        dark.window_fill = colors::MIDNIGHT;
        dark
    } else {
        Visuals::light()
    };
    visuals.hyperlink_color = if dark_mode { colors::GOLD } else { colors::TEAL };
    visuals.selection.bg_fill = colors::NAVY;
    visuals.selection.stroke.color = Color32::WHITE;
    visuals
}

/// Card accent for a metric trend.
pub fn trend_color(trend: Option<vcb_model::Trend>) -> Color32 {
    match trend {
        Some(vcb_model::Trend::Up) => colors::DANGER,
        Some(vcb_model::Trend::Down) => colors::SUCCESS,
        Some(vcb_model::Trend::Neutral) | None => colors::TEAL,
    }
}
