//! Integration tests for draughts-rust.
//!
//! These go through the public API only: geometry, board mutation, the rule
//! checks behind `Game::play`, and long random games played under the strict
//! rules.

use draughts_rust::board::Board;
use draughts_rust::error::{BoardError, DraughtsError, InvalidMoveError};
use draughts_rust::game::{Game, GameConfig, Outcome};
use draughts_rust::geometry::{col_of, row_of, tile_index_of, Coord, TileIndex};
use draughts_rust::max_capture::{compute_max_capture, is_max_capture};
use draughts_rust::movegen::Turn;
use draughts_rust::moves::{CaptureSeries, Move};
use draughts_rust::piece::{Piece, Player};
use draughts_rust::playout::random_playout;

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_tile_indices_cover_dark_squares() {
    let mut seen = Vec::new();
    for row in 0..10 {
        for col in 0..10 {
            match tile_index_of(row, col) {
                Ok(idx) => {
                    assert_eq!((row + col) % 2, 1);
                    assert_eq!((row_of(idx), col_of(idx)), (row, col));
                    seen.push(idx);
                }
                Err(_) => assert_eq!((row + col) % 2, 0),
            }
        }
    }
    seen.sort();
    assert_eq!(seen, (1..=50).collect::<Vec<TileIndex>>());
}

#[test]
fn test_extend_then_shrink() {
    for a in 1..=50 {
        for b in 1..=50 {
            let mv = Move::new(a, b);
            if a == b || !mv.is_diagonal() {
                continue;
            }
            if let Ok(longer) = mv.extend(1) {
                assert_eq!(longer.shrink(1), Ok(mv), "{mv}");
            }
        }
    }
}

#[test]
fn test_path_excludes_start() {
    let tiles: Vec<TileIndex> = Move::new(46, 5).path().unwrap().collect();
    assert_eq!(tiles, vec![41, 37, 32, 28, 23, 19, 14, 10, 5]);
    let back: Vec<TileIndex> = Move::new(5, 46).path().unwrap().collect();
    assert_eq!(back, vec![10, 14, 19, 23, 28, 32, 37, 41, 46]);
    assert_eq!(Coord::of(28) + Coord::new(2, 0), Coord::of(38));
}

// =============================================================================
// Board
// =============================================================================

#[test]
fn test_apply_step() {
    let mut board = Board::new(&[28], &[], &[]).unwrap();
    board.apply_step(&Move::new(28, 22)).unwrap();
    assert_eq!(board, Board::new(&[22], &[], &[]).unwrap());
}

#[test]
fn test_apply_captures() {
    let mut board = Board::new(&[28], &[22], &[]).unwrap();
    let series = CaptureSeries::from_moves(vec![Move::new(28, 17)]).unwrap();
    let captured = board.apply_captures(&series).unwrap();
    assert_eq!(captured, vec![Piece::new(22, Player::Two, false)]);
    assert_eq!(board, Board::new(&[17], &[], &[]).unwrap());
}

#[test]
fn test_overlap_builds_nothing() {
    assert_eq!(
        Board::new(&[28, 17], &[22, 17], &[]),
        Err(BoardError::Overlap(17))
    );
}

#[test]
fn test_board_equality_ignores_history() {
    let mut a = Board::new(&[28, 33], &[], &[]).unwrap();
    a.apply_step(&Move::new(28, 23)).unwrap();
    let mut b = Board::new(&[28, 33], &[], &[]).unwrap();
    b.apply_step(&Move::new(33, 29)).unwrap();
    b.apply_step(&Move::new(29, 23)).unwrap();
    b.apply_step(&Move::new(23, 18)).unwrap();
    b.apply_step(&Move::new(28, 23)).unwrap();
    b.apply_step(&Move::new(18, 33)).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Rules through the game
// =============================================================================

fn game(p1: &[TileIndex], p2: &[TileIndex], kings: &[TileIndex], to_move: Player) -> Game {
    Game::with_board(Board::new(p1, p2, kings).unwrap(), to_move, GameConfig::default())
}

#[test]
fn test_max_capture_example() {
    let board = Board::new(&[28, 44, 27], &[22, 12, 13], &[]).unwrap();
    assert_eq!(compute_max_capture(&board, Player::One), 3);
    let best = CaptureSeries::from_tiles(&[28, 17, 8, 19]).unwrap();
    assert!(is_max_capture(&board, &best));
    let shorter: [&[TileIndex]; 4] = [&[28, 17, 8], &[28, 17], &[27, 18, 7], &[27, 18]];
    for tiles in shorter {
        let series = CaptureSeries::from_tiles(tiles).unwrap();
        assert!(!is_max_capture(&board, &series), "{series}");
    }
}

#[test]
fn test_duplicate_capture() {
    let mut g = game(&[28], &[22], &[], Player::One);
    assert!(matches!(
        g.play("28x17x28"),
        Err(DraughtsError::InvalidMove(InvalidMoveError::DuplicateCapture { tile: 22, .. }))
    ));
}

#[test]
fn test_king_captures_along_a_column() {
    let mut g = game(&[28], &[38], &[28], Player::One);
    let Outcome::Moved { captured, piece, .. } = g.play("28x48").unwrap() else {
        panic!("expected a move");
    };
    assert_eq!(captured, vec![Piece::new(38, Player::Two, false)]);
    assert_eq!(piece, Piece::new(48, Player::One, true));
}

#[test]
fn test_king_jumps_one_piece_per_move() {
    // 23 and 14 are on the same diagonal from 32; each needs its own jump.
    let mut g = game(&[32], &[23, 14], &[32], Player::One);
    assert!(matches!(
        g.play("32x10"),
        Err(DraughtsError::InvalidMove(InvalidMoveError::IllegalCapture { index: 1, .. }))
    ));
    assert!(g.play("32x19x10").is_ok());
    assert_eq!(g.board(), &Board::new(&[10], &[], &[10]).unwrap());
}

#[test]
fn test_promotion_only_sets_king_flag() {
    let mut g = game(&[6], &[], &[], Player::One);
    g.play("6-1").unwrap();
    let piece = g.board().get(1).copied().unwrap();
    assert_eq!(piece, Piece::new(1, Player::One, false).crowned());
    assert_eq!(g.board().len(), 1);
}

#[test]
fn test_game_flow() {
    let mut g = Game::new();
    for command in ["32-28", "19-23", "28x19", "14x23"] {
        g.play(command).unwrap();
    }
    assert_eq!(g.board().count(Player::One), 19);
    assert_eq!(g.board().count(Player::Two), 19);
    assert_eq!(g.to_move(), Player::One);
    assert_eq!(g.play("exit"), Ok(Outcome::Exited));
    assert_eq!(g.play("37-32"), Err(DraughtsError::GameOver));
}

// =============================================================================
// Random games
// =============================================================================

fn check_invariants(board: &Board) {
    let tiles: Vec<TileIndex> = board.pieces().map(|p| p.position).collect();
    assert!(tiles.windows(2).all(|w| w[0] < w[1]), "{tiles:?}");
    for piece in board.pieces() {
        if piece.has_reached_end() {
            assert!(piece.is_king, "uncrowned piece on {}", piece.position);
        }
    }
    assert!(board.count(Player::One) <= 20);
    assert!(board.count(Player::Two) <= 20);
}

#[test]
fn test_random_games_follow_the_rules() {
    for seed in 0..8 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut g = Game::new();
        for _ in 0..150 {
            let turns = g.legal_turns();
            if turns.is_empty() {
                assert_eq!(g.winner(), Some(!g.to_move()));
                break;
            }
            // Everything listed must be playable under the strict rules.
            for turn in &turns {
                let mut copy = g.clone();
                assert!(copy.play(&turn.to_string()).is_ok(), "seed {seed}: {turn}");
            }

            let required = compute_max_capture(g.board(), g.to_move());
            let turn = turns[rng.usize(..turns.len())].clone();
            match &turn {
                Turn::Capture(series) => assert_eq!(series.len(), required),
                Turn::Step(_) => assert_eq!(required, 0),
            }
            let before = g.board().len();
            let Outcome::Moved { captured, .. } = g.play_turn(&turn).unwrap() else {
                panic!("expected a move");
            };
            assert_eq!(g.board().len(), before - captured.len());
            check_invariants(g.board());
        }
    }
}

#[test]
fn test_random_playout_ends_cleanly() {
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut g = Game::new();
    let result = random_playout(&mut g, 300, &mut rng).unwrap();
    assert!(result.plies <= 300);
    assert_eq!(g.ply(), result.plies);
    check_invariants(g.board());
    if let Some(winner) = result.winner {
        assert_eq!(winner, !g.to_move());
    }
}
