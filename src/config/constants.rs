//! Fixed numbers the rest of the crate hangs off.

use std::time::Duration;

/// Hard cap on the number of seeds in the grid. The 28th add is refused.
pub const MAX_SEEDS: usize = 27;

/// Tiles per grid row.
pub const GRID_COLUMNS: usize = 4;

/// Icon glyph point size inside a tile.
pub const TILE_ICON_SIZE: f32 = 48.0;

/// Padding between the glyph and the edge of its colored plate.
pub const TILE_PADDING: f32 = 12.0;

/// Corner radius of the tile plate.
pub const TILE_CORNER_RADIUS: u8 = 16;

/// Gap between tiles, both axes.
pub const TILE_SPACING: f32 = 20.0;

/// Tile labels longer than this are cut and get an ellipsis.
pub const NAME_DISPLAY_CHARS: usize = 12;

/// How often the wobble phase flips while edit mode is active.
pub const WOBBLE_PERIOD: Duration = Duration::from_millis(100);

/// Wobble sway, radians. Roughly one degree either side of upright.
pub const WOBBLE_ANGLE_RADIANS: f32 = 0.0175;

/// How long a transient notice stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::from_millis(2500);
