//! Replays of the recorded Milsjin - Salomé game.
//!
//! With kings capturing orthogonally, player one's `01x29x15` on turn 48 is
//! short of a six-piece capture, so only the permissive replay reaches the end.

use draughts_rust::board::Board;
use draughts_rust::error::{DraughtsError, InvalidMoveError};
use draughts_rust::game::{CapturePolicy, Game, GameConfig, GameState};
use draughts_rust::movegen::Turn;
use draughts_rust::piece::Player;
use draughts_rust::sample::{replay_sample, replay_sample_with, sample_turns, ReplayError};

fn permissive() -> GameConfig {
    GameConfig::default().with_capture_policy(CapturePolicy::Warn)
}

/// The game after the first `n` recorded commands, under the strict rules.
fn strict_game_after(n: usize) -> Game {
    let mut game = Game::new();
    for (turn, command) in sample_turns().into_iter().take(n) {
        if let Err(e) = game.play(command) {
            panic!("turn {turn} ({command}) rejected: {e}");
        }
    }
    game
}

#[test]
fn test_permissive_replay_reaches_the_end() {
    let game = replay_sample(permissive()).unwrap();
    assert_eq!(game.state(), GameState::Terminated);
    assert_eq!(game.ply(), 97);
    assert_eq!(game.to_move(), Player::Two);

    let expected = Board::new(&[15, 30, 47], &[19, 21, 25, 26, 34], &[15, 34]).unwrap();
    assert_eq!(game.board(), &expected);
}

#[test]
fn test_permissive_replay_visits_every_command() {
    let mut seen = Vec::new();
    replay_sample_with(permissive(), |_, turn, command| seen.push((turn, command.to_string())))
        .unwrap();
    assert_eq!(seen.len(), sample_turns().len());
    assert_eq!(seen.last(), Some(&(49, "exit".to_string())));
}

#[test]
fn test_strict_replay_rejects_short_king_capture() {
    assert_eq!(
        replay_sample(GameConfig::default()).unwrap_err(),
        ReplayError {
            turn: 48,
            command: "01x29x15".to_string(),
            source: DraughtsError::InvalidMove(InvalidMoveError::NotMaximal {
                submitted: 2,
                required: 6
            }),
        }
    );
}

#[test]
fn test_position_before_turn_48() {
    let game = strict_game_after(94);
    let expected = Board::new(
        &[1, 35, 37, 39, 47],
        &[19, 20, 21, 23, 25, 26, 31],
        &[1, 31],
    )
    .unwrap();
    assert_eq!(game.board(), &expected);
    assert_eq!(game.to_move(), Player::One);

    let turns = game.legal_turns();
    assert_eq!(turns.len(), 1);
    let Turn::Capture(series) = &turns[0] else {
        panic!("player one must capture");
    };
    assert_eq!(series.to_string(), "1x29x9x36x16x38x15");

    // The six-piece capture is accepted where the recorded one was not.
    let mut strict = game.clone();
    assert!(strict.play("1x29x9x36x16x38x15").is_ok());
    assert_eq!(strict.board().count(Player::Two), 1);
}

#[test]
fn test_no_recorded_step_skips_a_capture() {
    // Under the strict rules every command up to turn 48 is accepted, which
    // includes the check that no step is played while a capture is available.
    let game = strict_game_after(94);
    assert_eq!(game.ply(), 94);
}
