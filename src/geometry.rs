//! Mapping between tile indices (1-50) and board coordinates.
//!
//! This module is the only place that knows how the international numbering
//! lays tiles out. Everything else treats a `TileIndex` as an opaque key and
//! asks here for rows, columns and directions.
//!
//! ```text
//!   |  |01|  |02|  |03|  |04|  |05|     row 0
//!   |06|  |07|  |08|  |09|  |10|  |     row 1
//!   ...
//!   |46|  |47|  |48|  |49|  |50|  |     row 9
//! ```

use std::ops::{Add, Mul, Neg, Sub};

use crate::constants::{N, TILE_COUNT, TILES_PER_ROW};
use crate::error::GeometryError;

/// A dark square in international notation, in `1..=50`.
pub type TileIndex = u8;

/// A (row, column) pair, or a displacement between two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ZERO: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn of(idx: TileIndex) -> Self {
        Self::new(row_of(idx), col_of(idx))
    }

    #[inline]
    pub fn on_board(self) -> bool {
        (0..N).contains(&self.row) && (0..N).contains(&self.col)
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 != 0
    }

    /// Component-wise sign, so every displacement maps to one of the nine
    /// unit directions (including zero).
    #[inline]
    pub fn signum(self) -> Self {
        Self::new(self.row.signum(), self.col.signum())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.row, -self.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.row * rhs, self.col * rhs)
    }
}

/// The four diagonal unit steps.
pub const DIAGONALS: [Coord; 4] = [
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 1 },
];

/// The four orthogonal unit steps between dark squares. Dark squares on the
/// same row or column are two squares apart.
pub const ORTHOGONALS: [Coord; 4] = [
    Coord { row: -2, col: 0 },
    Coord { row: 2, col: 0 },
    Coord { row: 0, col: -2 },
    Coord { row: 0, col: 2 },
];

/// True if `idx` names a tile on the board.
#[inline]
pub fn is_tile_index(idx: u32) -> bool {
    (1..=TILE_COUNT as u32).contains(&idx)
}

/// The tile index of a dark square.
///
/// # Errors
/// - `OffBoard` if the coordinate is outside the 10x10 board
/// - `NonPlayableTile` if it names a light square
pub fn tile_index_of(row: i32, col: i32) -> Result<TileIndex, GeometryError> {
    let c = Coord::new(row, col);
    if !c.on_board() {
        return Err(GeometryError::OffBoard { row, col });
    }
    if !c.is_dark() {
        return Err(GeometryError::NonPlayableTile { row, col });
    }
    Ok((1 + row * TILES_PER_ROW + col / 2) as TileIndex)
}

/// Like [`tile_index_of`], but a light square is first nudged one unit along
/// `direction` onto a dark neighbour.
///
/// Move arithmetic on orthogonal moves can land halfway between two dark
/// squares; this picks the one on the requested side.
pub fn floor_tile_index_of(row: i32, col: i32, direction: Coord) -> Result<TileIndex, GeometryError> {
    let c = Coord::new(row, col);
    if c.on_board() && !c.is_dark() {
        let nudged = c + direction;
        return tile_index_of(nudged.row, nudged.col);
    }
    tile_index_of(row, col)
}

/// Shorthand for [`tile_index_of`] on a `Coord`.
#[inline]
pub fn tile_at(c: Coord) -> Result<TileIndex, GeometryError> {
    tile_index_of(c.row, c.col)
}

/// Row of a tile, 0 (top) to 9 (bottom).
#[inline]
pub fn row_of(idx: TileIndex) -> i32 {
    debug_assert!(is_tile_index(idx as u32), "tile index {idx} out of range");
    (idx as i32 - 1) / TILES_PER_ROW
}

/// Column of a tile, 0 (left) to 9 (right).
///
/// Even rows start on column 1, odd rows on column 0.
#[inline]
pub fn col_of(idx: TileIndex) -> i32 {
    debug_assert!(is_tile_index(idx as u32), "tile index {idx} out of range");
    let normalized = (idx as i32 - 1) % (2 * TILES_PER_ROW);
    if normalized >= TILES_PER_ROW {
        (normalized - TILES_PER_ROW) * 2
    } else {
        1 + normalized * 2
    }
}
