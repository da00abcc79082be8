//! The maximum-capture rule.
//!
//! International draughts forbids a shorter capture when a longer one is
//! available, so validating a capture series means knowing the longest chain
//! the player could have played instead.
//!
//! The search is a plain depth-first walk per piece. Each node tries every
//! candidate jump from the current tile; a jump is followed if it is a legal
//! capture (see [`crate::rules`]) of a piece not yet taken in this chain. The
//! set of taken pieces is copied into each child, so siblings never see each
//! other's captures. Only the length of the best chain is kept, not the chain.
//!
//! The board itself is never touched: the capturing piece is considered to
//! have left its origin, and captured pieces stay where they are (they still
//! block, and cannot be jumped twice).

use log::{debug, trace};

use crate::board::Board;
use crate::constants::{KING_REACH, MAX_CAPTURE_DEPTH};
use crate::error::InvalidMoveError;
use crate::geometry::{tile_at, Coord, TileIndex, DIAGONALS, ORTHOGONALS};
use crate::moves::{CaptureSeries, Move};
use crate::piece::{PieceKind, Player};
use crate::rules::{capture, Mover};

/// Every jump worth trying from `at`.
///
/// A normal piece only ever jumps two squares diagonally. A king tries every
/// distance along all eight lines until it runs off the board.
fn candidates(at: TileIndex, kind: PieceKind) -> Vec<Move> {
    let from = Coord::of(at);
    let mut moves = Vec::new();
    match kind {
        PieceKind::Normal => {
            for d in DIAGONALS {
                if let Ok(to) = tile_at(from + d * 2) {
                    moves.push(Move::new(at, to));
                }
            }
        }
        PieceKind::King => {
            for d in DIAGONALS.into_iter().chain(ORTHOGONALS) {
                for n in 1..=KING_REACH {
                    match tile_at(from + d * n) {
                        Ok(to) => moves.push(Move::new(at, to)),
                        Err(_) => break,
                    }
                }
            }
        }
    }
    moves
}

/// Legal continuations from `at`: the landing tile and the captured tile.
fn continuations<'a>(
    board: &'a Board,
    mover: Mover,
    kind: PieceKind,
    at: TileIndex,
    captured: &'a [TileIndex],
) -> impl Iterator<Item = (TileIndex, TileIndex)> + 'a {
    candidates(at, kind).into_iter().filter_map(move |mv| {
        capture(board, &mv, mover, kind)
            .filter(|tile| !captured.contains(tile))
            .map(|tile| (mv.end, tile))
    })
}

fn search(
    board: &Board,
    mover: Mover,
    kind: PieceKind,
    at: TileIndex,
    captured: Vec<TileIndex>,
) -> usize {
    let mut best = captured.len();
    if captured.len() >= MAX_CAPTURE_DEPTH {
        return best;
    }
    for (landing, tile) in continuations(board, mover, kind, at, &captured) {
        let mut next = captured.clone();
        next.push(tile);
        trace!("{} captures {tile} landing on {landing} (chain {})", mover.origin, next.len());
        best = best.max(search(board, mover, kind, landing, next));
    }
    best
}

/// Longest capture chain available to the piece on `origin` (0 if the tile
/// is empty or the piece cannot capture).
pub fn max_capture_from(board: &Board, origin: TileIndex) -> usize {
    match board.get(origin) {
        Some(piece) => {
            let mover = Mover {
                origin,
                owner: piece.owner,
            };
            search(board, mover, piece.kind(), origin, Vec::new())
        }
        None => 0,
    }
}

/// Longest capture chain available to any of `player`'s pieces.
pub fn compute_max_capture(board: &Board, player: Player) -> usize {
    let best = board
        .pieces_of(player)
        .map(|p| max_capture_from(board, p.position))
        .max()
        .unwrap_or(0);
    debug!("max capture for player {player}: {best}");
    best
}

/// True if `series` captures as many pieces as its owner possibly can.
pub fn is_max_capture(board: &Board, series: &CaptureSeries) -> bool {
    board
        .owner_at(series.start())
        .is_some_and(|owner| series.len() == compute_max_capture(board, owner))
}

/// Reject a series that captures fewer pieces than its owner could.
/// Returns the maximum on success.
///
/// # Errors
/// - `NoPiece` if nothing stands on the first tile
/// - `NotMaximal` if a longer chain is available
pub fn validate_max_capture(board: &Board, series: &CaptureSeries) -> Result<usize, InvalidMoveError> {
    let owner = board
        .owner_at(series.start())
        .ok_or(InvalidMoveError::NoPiece(series.start()))?;
    let required = compute_max_capture(board, owner);
    if series.len() < required {
        return Err(InvalidMoveError::NotMaximal {
            submitted: series.len(),
            required,
        });
    }
    Ok(required)
}

fn walk(
    board: &Board,
    mover: Mover,
    kind: PieceKind,
    tiles: Vec<TileIndex>,
    captured: Vec<TileIndex>,
    out: &mut Vec<CaptureSeries>,
) {
    let at = tiles[tiles.len() - 1];
    let mut leaf = true;
    if captured.len() < MAX_CAPTURE_DEPTH {
        for (landing, tile) in continuations(board, mover, kind, at, &captured) {
            leaf = false;
            let mut next_tiles = tiles.clone();
            next_tiles.push(landing);
            let mut next_captured = captured.clone();
            next_captured.push(tile);
            walk(board, mover, kind, next_tiles, next_captured, out);
        }
    }
    if leaf {
        out.extend(CaptureSeries::from_tiles(&tiles));
    }
}

/// Every complete capture chain for the piece on `origin`: chains that
/// cannot be continued, of any length.
pub fn capture_series_from(board: &Board, origin: TileIndex) -> Vec<CaptureSeries> {
    let mut out = Vec::new();
    if let Some(piece) = board.get(origin) {
        let mover = Mover {
            origin,
            owner: piece.owner,
        };
        walk(board, mover, piece.kind(), vec![origin], Vec::new(), &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(tiles: &[TileIndex]) -> CaptureSeries {
        CaptureSeries::from_tiles(tiles).unwrap()
    }

    //   |  |[]|  |[]|  |[]|  |[]|  |[]|
    //   |[]|  |[]|  |[]|  |[]|  |[]|  |
    //   |  |[]|  |<>|  |<>|  |[]|  |[]|   12 13
    //   |[]|  |[]|  |[]|  |[]|  |[]|  |
    //   |  |[]|  |<>|  |[]|  |[]|  |[]|   22
    //   |[]|  |⊂⊃|  |⊂⊃|  |[]|  |[]|  |   27 28
    //   ...
    //   |  |[]|  |[]|  |[]|  |⊂⊃|  |[]|   44
    fn board_1() -> Board {
        Board::new(&[28, 44, 27], &[22, 12, 13], &[]).unwrap()
    }

    // Same, with 14 instead of 13 and a king on 28.
    fn board_2() -> Board {
        Board::new(&[28, 44, 27], &[22, 12, 14], &[28]).unwrap()
    }

    #[test]
    fn test_candidates() {
        let mut normal: Vec<_> = candidates(28, PieceKind::Normal).iter().map(|m| m.end).collect();
        normal.sort();
        assert_eq!(normal, vec![17, 19, 37, 39]);
        // Corner tile 46 has a single jump.
        assert_eq!(candidates(46, PieceKind::Normal), vec![Move::new(46, 37)]);
        // Every king candidate is on the board and on a line from the start.
        for mv in candidates(28, PieceKind::King) {
            assert!(mv.length().is_ok(), "{mv}");
        }
    }

    #[test]
    fn test_max_capture_with_normal() {
        let b = board_1();
        assert_eq!(compute_max_capture(&b, Player::One), 3);
        assert_eq!(compute_max_capture(&b, Player::Two), 1);
        assert_eq!(max_capture_from(&b, 28), 3);
        assert_eq!(max_capture_from(&b, 27), 2);
        assert_eq!(max_capture_from(&b, 44), 0);
        assert_eq!(max_capture_from(&b, 1), 0);
    }

    #[test]
    fn test_is_max_capture() {
        let b = board_1();
        assert!(is_max_capture(&b, &series(&[28, 17, 8, 19])));
        assert!(!is_max_capture(&b, &series(&[28, 17, 8])));
        assert!(!is_max_capture(&b, &series(&[28, 17])));
        assert!(!is_max_capture(&b, &series(&[27, 18, 7])));
        assert!(!is_max_capture(&b, &series(&[27, 18, 9])));
        assert!(!is_max_capture(&b, &series(&[27, 18])));
        assert!(!is_max_capture(&b, &series(&[44, 40])));
        assert!(!is_max_capture(&b, &series(&[44, 39])));
    }

    #[test]
    fn test_max_capture_with_king() {
        let b = board_2();
        assert_eq!(compute_max_capture(&b, Player::One), 3);
        assert_eq!(compute_max_capture(&b, Player::Two), 1);
    }

    #[test]
    fn test_is_max_capture_with_king() {
        let b = board_2();
        assert!(is_max_capture(&b, &series(&[28, 17, 3, 20])));
        assert!(is_max_capture(&b, &series(&[28, 17, 3, 25])));
        assert!(!is_max_capture(&b, &series(&[28, 3, 20])));
        assert!(!is_max_capture(&b, &series(&[28, 17])));
        assert!(!is_max_capture(&b, &series(&[27, 18, 7])));
        assert!(!is_max_capture(&b, &series(&[44, 40])));
    }

    #[test]
    fn test_validate_max_capture() {
        let b = board_1();
        assert_eq!(validate_max_capture(&b, &series(&[28, 17, 8, 19])), Ok(3));
        assert_eq!(
            validate_max_capture(&b, &series(&[28, 17])),
            Err(InvalidMoveError::NotMaximal {
                submitted: 1,
                required: 3
            })
        );
        assert_eq!(
            validate_max_capture(&b, &series(&[30, 19])),
            Err(InvalidMoveError::NoPiece(30))
        );
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let b = board_2();
        let before = b.clone();
        compute_max_capture(&b, Player::One);
        capture_series_from(&b, 28);
        assert_eq!(b, before);
    }

    #[test]
    fn test_capture_series_from() {
        let b = board_1();
        let chains = capture_series_from(&b, 28);
        let longest: Vec<String> = chains
            .iter()
            .filter(|s| s.len() == 3)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(longest, vec!["28x17x8x19".to_string()]);
        assert!(chains.iter().all(|s| s.start() == 28));
        assert!(capture_series_from(&b, 44).is_empty());
    }

    #[test]
    fn test_chain_can_pass_through_origin() {
        // Capturing 22, 12, 13, 23 brings the piece back over its own start.
        let b = Board::new(&[28], &[22, 12, 13, 23], &[]).unwrap();
        assert_eq!(compute_max_capture(&b, Player::One), 4);
    }
}
