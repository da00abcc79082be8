//! Error types for every layer of the engine.
//!
//! Rule and notation errors are expected during play and carry enough detail
//! to explain the rejection to a player. `BoardError::NotFound` is a contract
//! failure: it means a caller skipped validation.

use thiserror::Error;

use crate::geometry::TileIndex;

/// A coordinate that has no tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("({row}, {col}) is a light square and cannot be played")]
    NonPlayableTile { row: i32, col: i32 },
    #[error("({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },
}

/// A command that matches neither the step nor the capture notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Couldn't parse the given move '{0}'")]
    InvalidFormat(String),
    #[error("Tile {0} is not on the board (expected 1-50)")]
    TileOutOfRange(u32),
}

/// A move or capture series rejected by the rules.
///
/// `index` fields count the jumps of a capture series from 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("'({start}, {end})' is off-axis")]
    OffAxis { start: TileIndex, end: TileIndex },
    #[error("There is no piece on tile {0}")]
    NoPiece(TileIndex),
    #[error("'({start}, {end})' is not a valid step")]
    IllegalStep { start: TileIndex, end: TileIndex },
    #[error("'({start}, {end})' (jump {index} of the series) is not a valid capture")]
    IllegalCapture {
        index: usize,
        start: TileIndex,
        end: TileIndex,
    },
    #[error("'({start}, {end})' (jump {index} of the series) does not continue from the previous jump")]
    DiscontinuousSeries {
        index: usize,
        start: TileIndex,
        end: TileIndex,
    },
    #[error("A capture series needs at least one jump")]
    EmptySeries,
    #[error("'({start}, {end})' (jump {index} of the series) captures tile {tile} a second time")]
    DuplicateCapture {
        index: usize,
        start: TileIndex,
        end: TileIndex,
        tile: TileIndex,
    },
    #[error("The piece on tile {tile} belongs to player {owner}, but it is player {to_move}'s turn")]
    WrongPlayer {
        tile: TileIndex,
        owner: crate::piece::Player,
        to_move: crate::piece::Player,
    },
    #[error("'({start}, {end})' is a step, but a capture of {required} piece(s) is available")]
    CaptureRequired {
        start: TileIndex,
        end: TileIndex,
        required: usize,
    },
    #[error("This series captures {submitted} piece(s), but {required} can be captured")]
    NotMaximal { submitted: usize, required: usize },
}

/// A board invariant violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Cannot place two opposing pieces on the same square ({0})")]
    Overlap(TileIndex),
    #[error("Tile {0} is listed twice")]
    Duplicate(TileIndex),
    #[error("Tile {0} is not on the board (expected 1-50)")]
    InvalidTile(TileIndex),
    #[error("No piece with index '{0}' found on board")]
    NotFound(TileIndex),
}

/// Everything `Game::play` can reject a command with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraughtsError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("The game is over")]
    GameOver,
}
