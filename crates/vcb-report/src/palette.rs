//! Brand colors shared by the newsletter and the desktop theme.

use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// Channels scaled to `[0, 1]` for PDF operators.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

pub const PRIMARY: Rgb8 = Rgb8(0x05, 0x09, 0x2B);
pub const SECONDARY: Rgb8 = Rgb8(0x1A, 0x38, 0x59);
pub const ACCENT: Rgb8 = Rgb8(0xFC, 0xC1, 0x69);
pub const TEAL: Rgb8 = Rgb8(0x00, 0x70, 0x97);
pub const GREEN: Rgb8 = Rgb8(0x10, 0xB9, 0x81);
pub const GRAY: Rgb8 = Rgb8(0x6B, 0x72, 0x80);
pub const TEXT: Rgb8 = Rgb8(0x7A, 0x7A, 0x7A);
pub const WHITE: Rgb8 = Rgb8(0xFF, 0xFF, 0xFF);
pub const PANEL: Rgb8 = Rgb8(0xF3, 0xF4, 0xF6);
pub const ROW_ALT: Rgb8 = Rgb8(0xF9, 0xFA, 0xFB);

/// Named colors a snapshot may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrandColor {
    Primary,
    Secondary,
    Accent,
    Teal,
    Green,
    Gray,
}

impl BrandColor {
    pub fn rgb(self) -> Rgb8 {
        match self {
            Self::Primary => PRIMARY,
            Self::Secondary => SECONDARY,
            Self::Accent => ACCENT,
            Self::Teal => TEAL,
            Self::Green => GREEN,
            Self::Gray => GRAY,
        }
    }
}
