//! Color extension trait for app-specific colors.
//!
//! Provides an extension trait `EstateColors` that adds catalog-specific
//! color methods to Iced's `Theme`. These are colors not covered by Iced's
//! built-in `ExtendedPalette`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::EstateColors;
//!
//! // In a style closure that receives &Theme:
//! .style(|theme: &Theme| {
//!     let colors = theme.estate();
//!     container::Style {
//!         background: Some(colors.background_elevated.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct EstateColorSet {
    // === Accent Tints ===
    /// Light tint of primary accent (for hover backgrounds)
    pub accent_primary_light: Color,
    /// Medium tint of primary accent (for selections)
    pub accent_primary_medium: Color,

    // === Borders ===
    /// Default border color
    pub border_default: Color,
    /// Subtle/lighter border
    pub border_subtle: Color,
    /// Focused element border (typically accent color)
    pub border_focused: Color,
    /// Border of inputs holding rejected text
    pub border_error: Color,

    // === Backgrounds ===
    /// Secondary background (photo placeholders, surfaces)
    pub background_secondary: Color,
    /// Elevated surface (cards, popovers) - white in light mode
    pub background_elevated: Color,

    // === Text ===
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (addresses, hints)
    pub text_muted: Color,
    /// Disabled text
    pub text_disabled: Color,
    /// Text on accent color backgrounds
    pub text_on_accent: Color,
    /// Price figures
    pub price: Color,

    // === Interactive ===
    /// Accent hover color
    pub accent_hover: Color,
    /// Accent pressed color
    pub accent_pressed: Color,
    /// Accent disabled color
    pub accent_disabled: Color,

    // === Special ===
    /// Shadow color for elevation
    pub shadow: Color,
    /// Strong shadow for hovered cards
    pub shadow_strong: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for catalog-specific colors.
///
/// Use it inside style closures that receive a `&Theme`.
pub trait EstateColors {
    /// Get the color set for this theme.
    fn estate(&self) -> EstateColorSet;
}

impl EstateColors for Theme {
    fn estate(&self) -> EstateColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;

        EstateColorSet {
            accent_primary_light: if is_dark {
                Color { a: 0.15, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.88)
            },
            accent_primary_medium: if is_dark {
                Color { a: 0.25, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.70)
            },

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.20, 0.20, 0.22)
            } else {
                Color::from_rgb(0.90, 0.90, 0.92)
            },
            border_focused: primary,
            border_error: palette.danger.base.color,

            background_secondary: palette.background.weak.color,
            background_elevated: if is_dark {
                Color::from_rgb(0.14, 0.15, 0.17)
            } else {
                Color::WHITE
            },

            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.80, 0.84)
            } else {
                Color::from_rgb(0.30, 0.31, 0.35)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.60, 0.61, 0.65)
            } else {
                Color::from_rgb(0.48, 0.49, 0.54)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.42, 0.42, 0.46)
            } else {
                Color::from_rgb(0.66, 0.66, 0.70)
            },
            text_on_accent: Color::WHITE,
            price: if is_dark {
                blend_color(palette.success.base.color, Color::WHITE, 0.10)
            } else {
                blend_color(palette.success.base.color, Color::BLACK, 0.25)
            },

            accent_hover: if is_dark {
                blend_color(primary, Color::WHITE, 0.15)
            } else {
                blend_color(primary, Color::BLACK, 0.12)
            },
            accent_pressed: blend_color(primary, Color::BLACK, 0.25),
            accent_disabled: if is_dark {
                Color::from_rgb(0.28, 0.28, 0.31)
            } else {
                Color::from_rgb(0.82, 0.82, 0.86)
            },

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.30 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.45 } else { 0.16 }),
        }
    }
}

/// Linear blend of `base` toward `blend` by `factor` (0.0 - 1.0).
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
