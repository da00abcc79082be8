//! Constants for board geometry, search limits, and rendering.
//!
//! International draughts is played on the 50 dark squares of a 10x10 board.
//! Dark squares are numbered 1 to 50, row by row from the top, so row `r`
//! holds tiles `5r + 1 ..= 5r + 5`. A square `(row, col)` is dark when
//! `row + col` is odd.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). International draughts is always 10x10.
pub const N: i32 = 10;

/// Number of playable (dark) tiles per row.
pub const TILES_PER_ROW: i32 = N / 2;

/// Number of playable tiles on the board.
pub const TILE_COUNT: u8 = 50;

/// Row that player one must reach to be crowned.
pub const PLAYER_ONE_BACK_RANK: i32 = 0;

/// Row that player two must reach to be crowned.
pub const PLAYER_TWO_BACK_RANK: i32 = N - 1;

/// Starting tiles for player one (the bottom four rows).
pub const PLAYER_ONE_START: std::ops::RangeInclusive<u8> = 31..=50;

/// Starting tiles for player two (the top four rows).
pub const PLAYER_TWO_START: std::ops::RangeInclusive<u8> = 1..=20;

// =============================================================================
// Search Limits
// =============================================================================

/// Farthest distance (in unit steps) a king is tried along one direction.
/// Nine diagonal steps cross the whole board, so ten is never reached.
pub const KING_REACH: i32 = 10;

/// Recursion bound for the max-capture search. A chain can never capture
/// more than the 20 pieces a side starts with, so this only trips on
/// malformed boards.
pub const MAX_CAPTURE_DEPTH: usize = 50;

/// Default ply limit for random self-play.
pub const MAX_PLAYOUT_PLIES: usize = 300;

// =============================================================================
// Rendering
// =============================================================================

/// Player one's normal piece.
pub const GLYPH_ONE: &str = "⊂⊃";

/// Player one's king.
pub const GLYPH_ONE_KING: &str = "⊆⊇";

/// Player two's normal piece.
pub const GLYPH_TWO: &str = "<>";

/// Player two's king.
pub const GLYPH_TWO_KING: &str = "≤≥";

/// Empty dark (playable) square.
pub const GLYPH_DARK: &str = "[]";

/// Light (unplayable) square.
pub const GLYPH_LIGHT: &str = "  ";
