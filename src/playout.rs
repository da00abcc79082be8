//! Random self-play.
//!
//! A playout picks uniformly among the legal turns of the side to move until
//! one side has nothing left to play or the ply limit is reached. There is no
//! evaluation; this exists to exercise the rules on positions no one would
//! think to write down.

use fastrand::Rng;
use log::debug;

use crate::error::DraughtsError;
use crate::game::Game;
use crate::piece::Player;

/// How a playout ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutResult {
    /// Plies played during this playout.
    pub plies: usize,
    /// Set when the side to move ran out of legal turns.
    pub winner: Option<Player>,
}

/// Play random legal turns on `game` for at most `max_plies` plies.
///
/// # Errors
/// Only if the game refuses a turn it listed as legal, or was already over.
pub fn random_playout(
    game: &mut Game,
    max_plies: usize,
    rng: &mut Rng,
) -> Result<PlayoutResult, DraughtsError> {
    let mut plies = 0;
    while plies < max_plies {
        let turns = game.legal_turns();
        if turns.is_empty() {
            break;
        }
        let turn = &turns[rng.usize(..turns.len())];
        game.play_turn(turn)?;
        plies += 1;
    }

    let winner = game.winner();
    debug!("playout stopped after {plies} plies, winner: {winner:?}");
    Ok(PlayoutResult { plies, winner })
}
