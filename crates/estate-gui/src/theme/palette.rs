//! Color palettes for Estate Studio.
//!
//! Light and dark palettes that integrate with Iced's theme system via the
//! `Palette` type. Iced derives its `ExtendedPalette` from these.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Check if this is a dark mode.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Create the Iced Palette for the given theme mode.
pub fn estate_palette(theme_mode: ThemeMode) -> Palette {
    if theme_mode.is_dark() {
        dark()
    } else {
        light()
    }
}

/// Light palette - slate blue accent on warm white.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.97),
        text: Color::from_rgb(0.11, 0.12, 0.14),
        primary: Color::from_rgb(0.09, 0.38, 0.53), // Harbor blue
        success: Color::from_rgb(0.18, 0.62, 0.38),
        warning: Color::from_rgb(0.93, 0.62, 0.10),
        danger: Color::from_rgb(0.82, 0.24, 0.22),
    }
}

/// Dark palette.
fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.08, 0.09, 0.10),
        text: Color::from_rgb(0.94, 0.94, 0.95),
        primary: Color::from_rgb(0.30, 0.62, 0.80),
        success: Color::from_rgb(0.35, 0.78, 0.52),
        warning: Color::from_rgb(1.0, 0.74, 0.25),
        danger: Color::from_rgb(0.94, 0.42, 0.40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_differ() {
        assert_ne!(
            estate_palette(ThemeMode::Light).background,
            estate_palette(ThemeMode::Dark).background
        );
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::default().is_dark());
    }
}
