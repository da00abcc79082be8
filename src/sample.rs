//! A recorded game for demonstration and regression testing.
//!
//! Milsjin, W. - Salomé, G., Confederation Cup 2000. Each line holds a turn
//! number followed by player one's move and player two's reply.
//!
//! Kings capture orthogonally in this engine, which opens a longer capture
//! for player one on turn 48 than the one recorded (`01x29x15` takes two
//! pieces where six are available). The game therefore only replays to the
//! end under [`CapturePolicy::Warn`](crate::game::CapturePolicy::Warn).

use log::debug;
use thiserror::Error;

use crate::error::DraughtsError;
use crate::game::{Game, GameConfig};

pub const SAMPLE_GAME: &str = "\
01.32-28 19-23
02.28x19 14x23
03.37-32 10-14
04.41-37 05-10
05.46-41 14-19
06.32-28 23x32
07.37x28 09-14
08.38-32 16-21
09.31-26 18-22
10.43-38 12-18
11.49-43 07-12
12.36-31 11-16
13.31-27 22x31
14.26x37 21-27
15.32x21 17x26
16.34-30 19-24
17.30x19 14x23x32
18.37x28 20-24
19.40-34 10-14
20.45-40 14-20
21.34-30 03-09
22.30x19 13x24
23.40-34 09-13
24.44-40 16-21
25.34-30 06-11
26.30x19 13x24
27.39-34 08-13
28.34-30 02-08
29.30x19 13x24
30.40-34 04-09
31.43-39 09-13
32.48-43 11-17
33.41-37 01-07
34.34-30 20-25
35.30x19 13x24
36.39-34 08-13
37.43-39 07-11
38.50-44 13-19
39.38-32 18-23
40.28-22 17x28
41.33x22 12-17
42.42-38 17x28
43.38-33 15-20
44.33x22 24-29
45.22-17 29x40x49
46.17x06 49x27
47.06-01 27-31
48.01x29x15 31x48x34
49.35-30 exit";

/// A recorded move the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("turn {turn}, '{command}': {source}")]
pub struct ReplayError {
    pub turn: usize,
    pub command: String,
    pub source: DraughtsError,
}

/// Every recorded command in play order, with its turn number.
pub fn sample_turns() -> Vec<(usize, &'static str)> {
    SAMPLE_GAME
        .lines()
        .filter_map(|line| line.split_once('.'))
        .filter_map(|(turn, moves)| Some((turn.trim().parse::<usize>().ok()?, moves)))
        .flat_map(|(turn, moves)| moves.split_whitespace().map(move |cmd| (turn, cmd)))
        .collect()
}

/// Replay the sample game, calling `on_ply` after every accepted command.
///
/// # Errors
/// The first command the engine rejects, with its turn number.
pub fn replay_sample_with(
    config: GameConfig,
    mut on_ply: impl FnMut(&Game, usize, &str),
) -> Result<Game, ReplayError> {
    let mut game = Game::with_config(config);
    for (turn, command) in sample_turns() {
        game.play(command).map_err(|source| ReplayError {
            turn,
            command: command.to_string(),
            source,
        })?;
        debug!("sample turn {turn}: {command}");
        on_ply(&game, turn, command);
    }
    Ok(game)
}

/// Replay the sample game and return it in its final state.
pub fn replay_sample(config: GameConfig) -> Result<Game, ReplayError> {
    replay_sample_with(config, |_, _, _| {})
}
