//! Theme module for Estate Studio.
//!
//! - Color palettes for light and dark mode (`palette`)
//! - App-specific colors through the `EstateColors` trait (`colors`)
//! - Spacing constants (`spacing`)
//! - Custom widget styles (`style`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;

pub use colors::{EstateColorSet, EstateColors};
pub use palette::ThemeMode;
pub use spacing::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM,
    CARD_IMAGE_HEIGHT, CONTENT_MAX_WIDTH, FILTER_PANEL_WIDTH, HERO_IMAGE_HEIGHT, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, THUMBNAIL_HEIGHT,
};
pub use style::{
    button_card, button_ghost, button_page, button_primary, button_secondary, container_card,
    container_popover, container_surface, estate_theme, text_input_default, text_input_invalid,
};
