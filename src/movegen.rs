//! Legal-turn enumeration.
//!
//! A turn is either a single step or a complete capture series. Capturing is
//! compulsory and must be maximal, so when the side to move can capture at
//! all, only the longest series are legal.

use std::fmt;

use crate::board::Board;
use crate::constants::KING_REACH;
use crate::geometry::{tile_at, Coord, TileIndex, DIAGONALS, ORTHOGONALS};
use crate::max_capture::{capture_series_from, compute_max_capture};
use crate::moves::{CaptureSeries, Move};
use crate::piece::{Piece, PieceKind, Player};

/// One player's move in a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Step(Move),
    Capture(CaptureSeries),
}

impl Turn {
    /// Tile the moving piece starts from.
    pub fn start(&self) -> TileIndex {
        match self {
            Turn::Step(mv) => mv.start,
            Turn::Capture(series) => series.start(),
        }
    }

    /// Tile the moving piece ends on.
    pub fn end(&self) -> TileIndex {
        match self {
            Turn::Step(mv) => mv.end,
            Turn::Capture(series) => series.end(),
        }
    }
}

/// Written in move notation, so a turn can be fed straight back to
/// [`crate::game::Game::play`].
impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Step(mv) => write!(f, "{mv}"),
            Turn::Capture(series) => write!(f, "{series}"),
        }
    }
}

/// Every step available to `piece`.
pub fn steps_from(board: &Board, piece: &Piece) -> Vec<Move> {
    let from = Coord::of(piece.position);
    let mut steps = Vec::new();
    match piece.kind() {
        PieceKind::Normal => {
            for d in DIAGONALS.into_iter().filter(|d| d.row == piece.owner.forward()) {
                if let Ok(to) = tile_at(from + d) {
                    if !board.contains(to) {
                        steps.push(Move::new(piece.position, to));
                    }
                }
            }
        }
        PieceKind::King => {
            for d in DIAGONALS.into_iter().chain(ORTHOGONALS) {
                for n in 1..=KING_REACH {
                    match tile_at(from + d * n) {
                        Ok(to) if !board.contains(to) => steps.push(Move::new(piece.position, to)),
                        _ => break,
                    }
                }
            }
        }
    }
    steps
}

/// Every legal turn for `player`.
///
/// If the player can capture, this is every capture series of maximal length
/// from any of their pieces; otherwise every step.
pub fn legal_turns(board: &Board, player: Player) -> Vec<Turn> {
    let required = compute_max_capture(board, player);
    if required > 0 {
        return board
            .pieces_of(player)
            .flat_map(|p| capture_series_from(board, p.position))
            .filter(|series| series.len() == required)
            .map(Turn::Capture)
            .collect();
    }

    board
        .pieces_of(player)
        .flat_map(|p| steps_from(board, p))
        .map(Turn::Step)
        .collect()
}

/// True if `player` has at least one legal turn.
pub fn has_legal_turn(board: &Board, player: Player) -> bool {
    compute_max_capture(board, player) > 0
        || board.pieces_of(player).any(|p| !steps_from(board, p).is_empty())
}
