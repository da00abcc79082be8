//! Players and pieces.

use std::fmt;
use std::ops::Not;

use crate::constants::{PLAYER_ONE_BACK_RANK, PLAYER_TWO_BACK_RANK};
use crate::geometry::{row_of, TileIndex};

/// One of the two sides.
///
/// Player one starts at the bottom (tiles 31-50), moves toward row 0 and
/// plays first. Player two starts at the top (tiles 1-20) and moves toward
/// row 9.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta of a forward step.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    /// The row on which this player's pieces are crowned.
    #[inline]
    pub const fn back_rank(self) -> i32 {
        match self {
            Player::One => PLAYER_ONE_BACK_RANK,
            Player::Two => PLAYER_TWO_BACK_RANK,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "one"),
            Player::Two => write!(f, "two"),
        }
    }
}

/// How a piece moves and captures. Rules dispatch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Normal,
    King,
}

/// A piece on a tile. Pieces are values: moving or crowning one produces a
/// new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub position: TileIndex,
    pub owner: Player,
    pub is_king: bool,
}

impl Piece {
    pub const fn new(position: TileIndex, owner: Player, is_king: bool) -> Self {
        Self {
            position,
            owner,
            is_king,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        if self.is_king {
            PieceKind::King
        } else {
            PieceKind::Normal
        }
    }

    /// The same piece on another tile.
    #[must_use]
    pub const fn relocated(&self, position: TileIndex) -> Self {
        Self::new(position, self.owner, self.is_king)
    }

    /// The same piece, crowned.
    #[must_use]
    pub const fn crowned(&self) -> Self {
        Self::new(self.position, self.owner, true)
    }

    /// True if the piece stands on its owner's far rank.
    pub fn has_reached_end(&self) -> bool {
        row_of(self.position) == self.owner.back_rank()
    }
}
