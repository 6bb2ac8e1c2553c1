//! Configuration module for the seedboard application.

// Can all be private now because we have a public re-export.
mod debug;
mod icons;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{
    GRID_COLUMNS, MAX_SEEDS, NAME_DISPLAY_CHARS, NOTICE_LIFETIME, TILE_CORNER_RADIUS,
    TILE_ICON_SIZE, TILE_PADDING, TILE_SPACING, WOBBLE_ANGLE_RADIANS, WOBBLE_PERIOD,
};
pub use debug::DF;
pub use icons::{DEFAULT_ICON, FALLBACK_GLYPH, ICON_CATALOG, IconEntry, icon_glyph};
pub use persistence::PERSISTENCE;
