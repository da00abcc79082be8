//! Move legality.
//!
//! Every rule is a pure predicate over a board and a move. Normal pieces and
//! kings follow different rules; each entry point matches on [`PieceKind`]
//! and hands off to the right predicate.
//!
//! Capture predicates see the board through a [`Mover`]: during a capture
//! series the capturing piece has left its origin, so that tile counts as
//! empty, while pieces captured earlier in the series stay on the board until
//! the whole series is applied.

use crate::board::Board;
use crate::error::InvalidMoveError;
use crate::geometry::TileIndex;
use crate::moves::{CaptureSeries, Move};
use crate::piece::{PieceKind, Player};

/// The piece making a capture: who owns it and which tile it set out from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mover {
    pub origin: TileIndex,
    pub owner: Player,
}

impl Mover {
    /// The piece currently on `origin`, if any.
    pub fn at(board: &Board, origin: TileIndex) -> Option<Self> {
        board.owner_at(origin).map(|owner| Self { origin, owner })
    }

    /// Owner of the piece on `idx`, with the mover's origin treated as empty.
    #[inline]
    fn occupant(&self, board: &Board, idx: TileIndex) -> Option<Player> {
        if idx == self.origin {
            None
        } else {
            board.owner_at(idx)
        }
    }
}

/// Check whether `board` has a piece on `idx`, optionally owned by `by`.
pub fn is_occupied(board: &Board, idx: TileIndex, by: Option<Player>) -> bool {
    match (board.owner_at(idx), by) {
        (Some(owner), Some(by)) => owner == by,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

// =============================================================================
// Steps
// =============================================================================

/// One square diagonally forward onto an empty tile.
pub fn is_valid_normal_step(board: &Board, mv: &Move) -> bool {
    let Some(owner) = board.owner_at(mv.start) else {
        return false;
    };
    mv.is_diagonal()
        && mv.length() == Ok(1)
        && mv.rows() == owner.forward()
        && !board.contains(mv.end)
}

/// Any distance along a diagonal or orthogonal line, every tile on the way
/// (end included) empty.
pub fn is_valid_king_step(board: &Board, mv: &Move) -> bool {
    match (mv.length(), mv.path()) {
        (Ok(length), Ok(mut path)) if length > 0 => path.all(|i| !board.contains(i)),
        _ => false,
    }
}

pub fn is_valid_step(board: &Board, mv: &Move) -> bool {
    match board.get(mv.start).map(|p| p.kind()) {
        Some(PieceKind::Normal) => is_valid_normal_step(board, mv),
        Some(PieceKind::King) => is_valid_king_step(board, mv),
        None => false,
    }
}

// =============================================================================
// Single captures
// =============================================================================

/// Two squares diagonally, in any direction, over an opponent piece onto an
/// empty tile. Returns the captured tile.
pub fn normal_capture(board: &Board, mv: &Move, mover: Mover) -> Option<TileIndex> {
    if !mv.is_diagonal() || mv.length() != Ok(2) {
        return None;
    }
    let jumped = mv.shrink(1).ok()?.end;
    let lands_empty = mover.occupant(board, mv.end).is_none();
    (mover.occupant(board, jumped) == Some(!mover.owner) && lands_empty).then_some(jumped)
}

/// Along a diagonal or orthogonal line over exactly one opponent piece and
/// none of the mover's own, onto an empty tile. Returns the captured tile.
pub fn king_capture(board: &Board, mv: &Move, mover: Mover) -> Option<TileIndex> {
    let path = mv.path().ok()?;
    if mover.occupant(board, mv.end).is_some() {
        return None;
    }

    let mut jumped = None;
    for idx in path {
        match mover.occupant(board, idx) {
            Some(owner) if owner == mover.owner => return None,
            Some(_) if jumped.is_some() => return None,
            Some(_) => jumped = Some(idx),
            None => {}
        }
    }
    jumped
}

/// The tile `mv` captures for a piece of the given kind, if it is a legal
/// capture.
pub fn capture(board: &Board, mv: &Move, mover: Mover, kind: PieceKind) -> Option<TileIndex> {
    match kind {
        PieceKind::Normal => normal_capture(board, mv, mover),
        PieceKind::King => king_capture(board, mv, mover),
    }
}

pub fn is_valid_normal_capture(board: &Board, mv: &Move) -> bool {
    Mover::at(board, mv.start).is_some_and(|m| normal_capture(board, mv, m).is_some())
}

pub fn is_valid_king_capture(board: &Board, mv: &Move) -> bool {
    Mover::at(board, mv.start).is_some_and(|m| king_capture(board, mv, m).is_some())
}

// =============================================================================
// Validation
// =============================================================================

/// Check a single step.
///
/// # Errors
/// - `NoPiece` if nothing stands on `mv.start`
/// - `OffAxis` if the move is neither diagonal nor orthogonal
/// - `IllegalStep` if the piece may not make this step
pub fn validate_step(board: &Board, mv: &Move) -> Result<(), InvalidMoveError> {
    if !board.contains(mv.start) {
        return Err(InvalidMoveError::NoPiece(mv.start));
    }
    mv.length()?;
    if !is_valid_step(board, mv) {
        return Err(InvalidMoveError::IllegalStep {
            start: mv.start,
            end: mv.end,
        });
    }
    Ok(())
}

/// Check every jump of a capture series, in order. Returns the captured
/// tiles. Maximality is not checked here.
///
/// # Errors
/// - `NoPiece` if nothing stands on the first tile
/// - `OffAxis` for a jump that is neither diagonal nor orthogonal
/// - `IllegalCapture` for a jump that captures nothing legally
/// - `DuplicateCapture` for a jump over a piece already captured in this series
pub fn validate_captures(
    board: &Board,
    series: &CaptureSeries,
) -> Result<Vec<TileIndex>, InvalidMoveError> {
    let piece = board
        .get(series.start())
        .ok_or(InvalidMoveError::NoPiece(series.start()))?;
    let mover = Mover {
        origin: piece.position,
        owner: piece.owner,
    };

    let mut captured: Vec<TileIndex> = Vec::with_capacity(series.len());
    for (i, mv) in series.moves().iter().enumerate() {
        mv.length()?;
        let index = i + 1;
        let tile = capture(board, mv, mover, piece.kind()).ok_or(
            InvalidMoveError::IllegalCapture {
                index,
                start: mv.start,
                end: mv.end,
            },
        )?;
        if captured.contains(&tile) {
            return Err(InvalidMoveError::DuplicateCapture {
                index,
                start: mv.start,
                end: mv.end,
                tile,
            });
        }
        captured.push(tile);
    }
    Ok(captured)
}

pub fn is_valid_capture_series(board: &Board, series: &CaptureSeries) -> bool {
    validate_captures(board, series).is_ok()
}
