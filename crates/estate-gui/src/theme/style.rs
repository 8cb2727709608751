//! Theme creation and widget style functions.
//!
//! Style functions receive `&Theme` and use it to access colors:
//!
//! ```rust,ignore
//! use crate::theme::{button_primary, EstateColors};
//!
//! button(text("Search")).style(button_primary)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::EstateColors;
use super::palette::{ThemeMode, estate_palette};
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the Estate theme for the given mode.
pub fn estate_theme(theme_mode: ThemeMode) -> Theme {
    Theme::custom(
        format!("Estate {}", theme_mode.label()),
        estate_palette(theme_mode),
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn flat_border(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.estate();

    let (background, text_color, shadow) = match status {
        button::Status::Active => (
            palette.primary.base.color,
            colors.text_on_accent,
            Shadow {
                color: colors.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
        ),
        button::Status::Hovered => (
            colors.accent_hover,
            colors.text_on_accent,
            Shadow {
                color: colors.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
        ),
        button::Status::Pressed => (
            colors.accent_pressed,
            colors.text_on_accent,
            Shadow::default(),
        ),
        button::Status::Disabled => (
            colors.accent_disabled,
            colors.text_muted,
            Shadow::default(),
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: flat_border(spacing::BORDER_RADIUS_SM),
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.estate();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            colors.background_elevated,
            colors.text_secondary,
            colors.border_default,
        ),
        button::Status::Hovered => (
            palette.background.base.color,
            colors.text_secondary,
            colors.text_disabled,
        ),
        button::Status::Pressed => (
            colors.background_secondary,
            colors.text_secondary,
            colors.border_default,
        ),
        button::Status::Disabled => (
            colors.background_secondary,
            colors.text_disabled,
            colors.border_subtle,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        ..Default::default()
    }
}

/// Ghost button style - minimal visual weight.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.estate();

    let (background, text_color) = match status {
        button::Status::Active => (None, palette.primary.base.color),
        button::Status::Hovered => (
            Some(colors.accent_primary_light.into()),
            palette.primary.base.color,
        ),
        button::Status::Pressed => (
            Some(colors.accent_primary_medium.into()),
            colors.accent_pressed,
        ),
        button::Status::Disabled => (None, colors.text_disabled),
    };

    button::Style {
        background,
        text_color,
        border: flat_border(spacing::BORDER_RADIUS_SM),
        ..Default::default()
    }
}

/// Page number button; the current page is filled.
pub fn button_page(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if selected {
            button_primary(theme, status)
        } else {
            button_ghost(theme, status)
        }
    }
}

/// Property card button - an elevated card that lifts on hover.
pub fn button_card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = theme.estate();
    let palette = theme.extended_palette();

    let (border_color, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            colors.border_default,
            Shadow {
                color: colors.shadow_strong,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        ),
        button::Status::Active | button::Status::Disabled => (
            colors.border_subtle,
            Shadow {
                color: colors.shadow,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
        ),
    };

    button::Style {
        background: Some(colors.background_elevated.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        shadow,
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let colors = theme.estate();

    container::Style {
        background: Some(colors.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: colors.border_subtle,
        },
        shadow: Shadow {
            color: colors.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Popover container style - floating panel such as the price filter.
pub fn container_popover(theme: &Theme) -> container::Style {
    let colors = theme.estate();

    container::Style {
        background: Some(colors.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: colors.border_default,
        },
        shadow: Shadow {
            color: colors.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Surface container style - photo placeholders and muted blocks.
pub fn container_surface(theme: &Theme) -> container::Style {
    let colors = theme.estate();

    container::Style {
        background: Some(colors.background_secondary.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let colors = theme.estate();

    let (background, border_width, border_color, value) = match status {
        text_input::Status::Active => (
            colors.background_elevated,
            spacing::BORDER_WIDTH_THIN,
            colors.border_default,
            palette.background.base.text,
        ),
        text_input::Status::Hovered => (
            colors.background_elevated,
            spacing::BORDER_WIDTH_THIN,
            colors.text_disabled,
            palette.background.base.text,
        ),
        text_input::Status::Focused { .. } => (
            colors.background_elevated,
            spacing::BORDER_WIDTH_MEDIUM,
            colors.border_focused,
            palette.background.base.text,
        ),
        text_input::Status::Disabled => (
            colors.background_secondary,
            spacing::BORDER_WIDTH_THIN,
            colors.border_default,
            colors.text_muted,
        ),
    };

    text_input::Style {
        background: background.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: colors.text_muted,
        placeholder: colors.text_disabled,
        value,
        selection: colors.accent_primary_medium,
    }
}

/// Text input holding text that was rejected; keeps the error border.
pub fn text_input_invalid(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = theme.estate();
    let style = text_input_default(theme, status);

    text_input::Style {
        border: Border {
            color: colors.border_error,
            ..style.border
        },
        ..style
    }
}
