//! Colors for the route planner
//!
//! Mode colors tint everything route-related (cards, chart, navigation
//! button). Profile colors tint the profile chips. The light and dark themes
//! only cover text, background and tab bar tint.
//!
//! ```rust
//! use app_ui::theme::{mode_palette, ui};
//! use route_core::ModeId;
//!
//! assert_eq!(mode_palette(ModeId::Car).primary, "#2196F3");
//! assert_eq!(ui::PRIMARY, "#1976D2");
//! ```

use route_core::ModeId;
use serde::{Deserialize, Serialize};
use storage::ThemePreference;

/// A color as an RGB hex string (e.g., "#FFFFFF")
pub type Color = &'static str;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

// =============================================================================
// UI Colors
// =============================================================================

/// App-wide accent colors
pub mod ui {
    use super::Color;

    /// Buttons, links, active tabs
    pub const PRIMARY: Color = "#1976D2";
    /// Secondary accent
    pub const SECONDARY: Color = "#03A9F4";
    /// Highlights
    pub const ACCENT: Color = "#FF5722";
    /// Positive state
    pub const SUCCESS: Color = "#4CAF50";
    /// Warnings
    pub const WARNING: Color = "#FFC107";
    /// Errors and sign out
    pub const ERROR: Color = "#F44336";
    /// Separators
    pub const DIVIDER: Color = "#E0E0E0";
    /// Card surfaces
    pub const CARD_BACKGROUND: Color = "#FFFFFF";
    /// Text input fill
    pub const INPUT_BACKGROUND: Color = "#F5F5F5";
}

// =============================================================================
// Mode and Profile Colors
// =============================================================================

/// Three shades for one transport mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModePalette {
    /// Main tint
    pub primary: Color,
    /// Lighter tint
    pub secondary: Color,
    /// Background wash
    pub light: Color,
}

/// Palette of a mode
pub fn mode_palette(mode: ModeId) -> ModePalette {
    match mode {
        ModeId::Walking => ModePalette {
            primary: "#4CAF50",
            secondary: "#81C784",
            light: "#E8F5E9",
        },
        ModeId::Cycling => ModePalette {
            primary: "#FF9800",
            secondary: "#FFB74D",
            light: "#FFF3E0",
        },
        ModeId::Car => ModePalette {
            primary: "#2196F3",
            secondary: "#64B5F6",
            light: "#E3F2FD",
        },
        ModeId::Transit => ModePalette {
            primary: "#9C27B0",
            secondary: "#BA68C8",
            light: "#F3E5F5",
        },
    }
}

/// Primary tint for a raw mode key; unknown modes use [`ui::PRIMARY`]
pub fn mode_color(mode: &str) -> Color {
    mode.parse::<ModeId>()
        .map(|mode| mode_palette(mode).primary)
        .unwrap_or(ui::PRIMARY)
}

/// Chip color for a profile id; profiles without a color use [`ui::PRIMARY`]
pub fn profile_color(profile: &str) -> Color {
    match profile {
        "safe" => "#4CAF50",
        "sport" => "#F44336",
        "fast" => "#2196F3",
        "scenic" => "#FF9800",
        "accessible" => "#9C27B0",
        _ => ui::PRIMARY,
    }
}

// =============================================================================
// Themes
// =============================================================================

/// Theme name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl From<ThemePreference> for ThemeName {
    fn from(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Light => ThemeName::Light,
            ThemePreference::Dark => ThemeName::Dark,
        }
    }
}

/// Base colors of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Body text
    pub text: Color,
    /// Screen background
    pub background: Color,
    /// Interactive tint
    pub tint: Color,
    /// Inactive tab icon
    pub tab_icon_default: Color,
    /// Active tab icon
    pub tab_icon_selected: Color,
}

/// Colors of a theme
pub fn theme_colors(name: ThemeName) -> ThemeColors {
    match name {
        ThemeName::Light => ThemeColors {
            text: "#000",
            background: "#fff",
            tint: "#2f95dc",
            tab_icon_default: "#ccc",
            tab_icon_selected: "#2f95dc",
        },
        ThemeName::Dark => ThemeColors {
            text: "#fff",
            background: "#000",
            tint: "#fff",
            tab_icon_default: "#ccc",
            tab_icon_selected: "#fff",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#1976D2"), Some((0x19, 0x76, 0xD2)));
        assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#12"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_mode_colors() {
        assert_eq!(mode_color("walking"), "#4CAF50");
        assert_eq!(mode_color("transit"), "#9C27B0");
        assert_eq!(mode_color("boat"), ui::PRIMARY);
        assert_eq!(mode_palette(ModeId::Cycling).light, "#FFF3E0");
    }

    #[test]
    fn test_profile_colors() {
        assert_eq!(profile_color("sport"), "#F44336");
        assert_eq!(profile_color("no-tolls"), ui::PRIMARY);
    }

    #[test]
    fn test_theme_from_preference() {
        let colors = theme_colors(ThemePreference::Dark.into());
        assert_eq!(colors.background, "#000");
        assert_eq!(theme_colors(ThemeName::default()).tint, "#2f95dc");
    }

    #[test]
    fn test_all_palette_entries_parse() {
        for mode in ModeId::all() {
            let palette = mode_palette(mode);
            for color in [palette.primary, palette.secondary, palette.light] {
                assert!(parse_hex_color(color).is_some(), "{color}");
            }
        }
    }
}
