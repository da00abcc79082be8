//! Moves and capture series.
//!
//! A [`Move`] is a vector from one tile to another. Its direction is one of
//! the four diagonals or, for kings, one of the four orthogonals. Because
//! only dark squares carry an index, one orthogonal unit step covers two
//! rows (or two columns).

use std::fmt;

use crate::error::{DraughtsError, GeometryError, InvalidMoveError};
use crate::geometry::{floor_tile_index_of, tile_at, Coord, TileIndex};

/// A single move from `start` to `end`.
///
/// Construction never fails; whether the move makes sense is decided by
/// the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: TileIndex,
    pub end: TileIndex,
    direction: Coord,
}

impl Move {
    pub fn new(start: TileIndex, end: TileIndex) -> Self {
        let direction = (Coord::of(end) - Coord::of(start)).signum();
        Self {
            start,
            end,
            direction,
        }
    }

    /// Unit row/column signs from `start` toward `end`.
    #[inline]
    pub fn direction(&self) -> Coord {
        self.direction
    }

    #[inline]
    fn delta(&self) -> Coord {
        Coord::of(self.end) - Coord::of(self.start)
    }

    /// Rows moved toward row 9 (negative when moving up).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.delta().row
    }

    pub fn is_diagonal(&self) -> bool {
        let d = self.delta();
        d.row.abs() == d.col.abs()
    }

    pub fn is_perpendicular(&self) -> bool {
        self.direction.row == 0 || self.direction.col == 0
    }

    /// Number of rows or columns crossed.
    ///
    /// # Errors
    /// `OffAxis` if the move is neither diagonal nor orthogonal.
    pub fn length(&self) -> Result<i32, InvalidMoveError> {
        if !self.is_diagonal() && !self.is_perpendicular() {
            return Err(InvalidMoveError::OffAxis {
                start: self.start,
                end: self.end,
            });
        }
        let d = self.delta();
        Ok(d.row.abs().max(d.col.abs()))
    }

    /// Coordinate offset of one step along this move.
    fn step(&self) -> Coord {
        if self.is_perpendicular() {
            self.direction * 2
        } else {
            self.direction
        }
    }

    /// The one-step move in the same direction.
    pub fn unit(&self) -> Result<Move, GeometryError> {
        Ok(Move::new(self.start, tile_at(Coord::of(self.start) + self.step())?))
    }

    /// The move lengthened by `n` squares past its end.
    pub fn extend(&self, n: i32) -> Result<Move, GeometryError> {
        let e = Coord::of(self.end) + self.direction * n;
        Ok(Move::new(
            self.start,
            floor_tile_index_of(e.row, e.col, -self.direction)?,
        ))
    }

    /// The move shortened by `n` squares; `shrink(1)` on a two-square
    /// diagonal jump ends on the jumped square.
    pub fn shrink(&self, n: i32) -> Result<Move, GeometryError> {
        let e = Coord::of(self.end) - self.direction * n;
        Ok(Move::new(
            self.start,
            floor_tile_index_of(e.row, e.col, self.direction)?,
        ))
    }

    /// The move with its length floor-divided by `n`.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn divide(&self, n: i32) -> Result<Move, DraughtsError> {
        let magnitude = self.length()? / n;
        let e = Coord::of(self.start) + self.direction * magnitude;
        Ok(Move::new(
            self.start,
            floor_tile_index_of(e.row, e.col, -self.direction)?,
        ))
    }

    #[must_use]
    pub fn inverse(&self) -> Move {
        Move::new(self.end, self.start)
    }

    /// Every tile this move crosses, excluding `start` and including `end`.
    ///
    /// # Errors
    /// `OffAxis` if the move is neither diagonal nor orthogonal.
    pub fn path(&self) -> Result<Path, InvalidMoveError> {
        let length = self.length()?;
        let step = self.step();
        let stride = step.row.abs().max(step.col.abs()).max(1);
        Ok(Path {
            at: Coord::of(self.start),
            step,
            remaining: (length / stride) as usize,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Lazy walk over the tiles of a [`Move`]. Clone it to walk again.
#[derive(Debug, Clone)]
pub struct Path {
    at: Coord,
    step: Coord,
    remaining: usize,
}

impl Iterator for Path {
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.at = self.at + self.step;
        tile_at(self.at).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Path {}

/// A chain of jumps played as one turn. Each jump starts where the previous
/// one landed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureSeries {
    moves: Vec<Move>,
}

impl CaptureSeries {
    /// Chain consecutive tiles: `[28, 17, 8]` becomes `28-17, 17-8`.
    /// Returns `None` for fewer than two tiles.
    pub fn from_tiles(tiles: &[TileIndex]) -> Option<Self> {
        if tiles.len() < 2 {
            return None;
        }
        let moves = tiles.windows(2).map(|w| Move::new(w[0], w[1])).collect();
        Some(Self { moves })
    }

    /// Build a series from individual moves, checking that they connect.
    pub fn from_moves(moves: Vec<Move>) -> Result<Self, InvalidMoveError> {
        if moves.is_empty() {
            return Err(InvalidMoveError::EmptySeries);
        }
        for (i, pair) in moves.windows(2).enumerate() {
            if pair[0].end != pair[1].start {
                return Err(InvalidMoveError::DiscontinuousSeries {
                    index: i + 2,
                    start: pair[1].start,
                    end: pair[1].end,
                });
            }
        }
        Ok(Self { moves })
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of jumps.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Tile the capturing piece starts from.
    pub fn start(&self) -> TileIndex {
        self.moves[0].start
    }

    /// Tile the capturing piece lands on.
    pub fn end(&self) -> TileIndex {
        self.moves[self.moves.len() - 1].end
    }

    /// Start tile followed by every landing tile.
    pub fn tiles(&self) -> impl Iterator<Item = TileIndex> + '_ {
        std::iter::once(self.start()).chain(self.moves.iter().map(|m| m.end))
    }
}

impl<'a> IntoIterator for &'a CaptureSeries {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for CaptureSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.tiles().map(|t| t.to_string()).collect();
        write!(f, "{}", tiles.join("x"))
    }
}
