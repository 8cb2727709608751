//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - photos, popovers
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Full/pill radius - badges, avatars
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border - focused inputs
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Height of the photo strip on a property card
pub const CARD_IMAGE_HEIGHT: f32 = 180.0;

/// Height of the primary photo on the detail view
pub const HERO_IMAGE_HEIGHT: f32 = 360.0;

/// Height of a gallery thumbnail on the detail view
pub const THUMBNAIL_HEIGHT: f32 = 120.0;

/// Owner portrait size
pub const AVATAR_SIZE: f32 = 56.0;

/// Maximum width of page content
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// Width of the price filter panel
pub const FILTER_PANEL_WIDTH: f32 = 360.0;
