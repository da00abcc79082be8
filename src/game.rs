//! A game in progress: the board, whose turn it is, and the rules applied to
//! every submitted command.
//!
//! ## Example
//!
//! ```
//! use draughts_rust::game::{Game, Outcome};
//! use draughts_rust::piece::Player;
//!
//! let mut game = Game::new();
//! game.play("32-28").unwrap();
//! game.play("19-23").unwrap();
//! let Outcome::Moved { captured, .. } = game.play("28x19").unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(captured.len(), 1);
//! assert_eq!(game.to_move(), Player::Two);
//! ```

use log::{debug, info, warn};

use crate::board::Board;
use crate::error::{BoardError, DraughtsError, InvalidMoveError};
use crate::geometry::TileIndex;
use crate::max_capture::{compute_max_capture, validate_max_capture};
use crate::movegen::{self, Turn};
use crate::moves::{CaptureSeries, Move};
use crate::notation::{parse_command, Command};
use crate::piece::{Piece, Player};
use crate::rules::{validate_captures, validate_step};

/// What to do with a move that breaks the maximum-capture rule: a capture
/// series shorter than the longest available one, or a step while a capture
/// is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapturePolicy {
    /// Reject the move.
    #[default]
    Enforce,
    /// Log a warning and play the move anyway.
    Warn,
}

/// Runtime rule switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub capture_policy: CapturePolicy,
    /// Reject moves by the side not to move.
    pub enforce_turn_order: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            capture_policy: CapturePolicy::Enforce,
            enforce_turn_order: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_capture_policy(mut self, capture_policy: CapturePolicy) -> Self {
        self.capture_policy = capture_policy;
        self
    }

    #[must_use]
    pub fn with_turn_order(mut self, enforce_turn_order: bool) -> Self {
        self.enforce_turn_order = enforce_turn_order;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove,
    Terminated,
}

/// The result of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved {
        turn: Turn,
        /// The moving piece where it ended up (crowned if promoted).
        piece: Piece,
        captured: Vec<Piece>,
        promoted: bool,
    },
    Exited,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: GameConfig,
    state: GameState,
    to_move: Player,
    ply: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard opening with the default rules.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::with_board(Board::standard(), Player::One, config)
    }

    /// Start from an arbitrary position.
    pub fn with_board(board: Board, to_move: Player, config: GameConfig) -> Self {
        Self {
            board,
            config,
            state: GameState::AwaitingMove,
            to_move,
            ply: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of moves played so far.
    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Terminated
    }

    /// Parse and play one command.
    ///
    /// A rejected command leaves the game unchanged.
    ///
    /// # Errors
    /// - `GameOver` once the game has been exited
    /// - `Notation` if the command cannot be parsed
    /// - `InvalidMove` if the rules reject the move
    pub fn play(&mut self, command: &str) -> Result<Outcome, DraughtsError> {
        if self.is_over() {
            return Err(DraughtsError::GameOver);
        }
        match parse_command(command)? {
            Command::Exit => {
                self.exit();
                Ok(Outcome::Exited)
            }
            Command::Step(mv) => self.play_turn(&Turn::Step(mv)),
            Command::Capture(series) => self.play_turn(&Turn::Capture(series)),
        }
    }

    /// End the game. Later commands fail with `GameOver`.
    pub fn exit(&mut self) {
        info!("game over after {} plies", self.ply);
        self.state = GameState::Terminated;
    }

    /// Play an already-parsed turn. Same checks as [`Game::play`].
    pub fn play_turn(&mut self, turn: &Turn) -> Result<Outcome, DraughtsError> {
        if self.is_over() {
            return Err(DraughtsError::GameOver);
        }
        let owner = self.check_owner(turn.start())?;

        let captured = match turn {
            Turn::Step(mv) => {
                self.check_no_capture(mv, owner)?;
                validate_step(&self.board, mv)?;
                self.board.apply_step(mv)?;
                Vec::new()
            }
            Turn::Capture(series) => {
                validate_captures(&self.board, series)?;
                self.check_maximal(series)?;
                self.board.apply_captures(series)?
            }
        };

        let (piece, promoted) = self.promote(turn.end())?;
        debug!(
            "ply {}: player {owner} plays {turn}{}",
            self.ply + 1,
            if promoted { " and is crowned" } else { "" }
        );

        self.to_move = !owner;
        self.ply += 1;
        Ok(Outcome::Moved {
            turn: turn.clone(),
            piece,
            captured,
            promoted,
        })
    }

    /// Owner of the piece on `start`, if it may move now.
    fn check_owner(&self, start: TileIndex) -> Result<Player, InvalidMoveError> {
        let owner = self
            .board
            .owner_at(start)
            .ok_or(InvalidMoveError::NoPiece(start))?;
        if self.config.enforce_turn_order && owner != self.to_move {
            return Err(InvalidMoveError::WrongPlayer {
                tile: start,
                owner,
                to_move: self.to_move,
            });
        }
        Ok(owner)
    }

    fn check_no_capture(&self, mv: &Move, owner: Player) -> Result<(), InvalidMoveError> {
        let required = compute_max_capture(&self.board, owner);
        if required == 0 {
            return Ok(());
        }
        self.apply_policy(InvalidMoveError::CaptureRequired {
            start: mv.start,
            end: mv.end,
            required,
        })
    }

    fn check_maximal(&self, series: &CaptureSeries) -> Result<(), InvalidMoveError> {
        match validate_max_capture(&self.board, series) {
            Ok(_) => Ok(()),
            Err(e @ InvalidMoveError::NotMaximal { .. }) => self.apply_policy(e),
            Err(e) => Err(e),
        }
    }

    fn apply_policy(&self, violation: InvalidMoveError) -> Result<(), InvalidMoveError> {
        match self.config.capture_policy {
            CapturePolicy::Enforce => Err(violation),
            CapturePolicy::Warn => {
                warn!("{violation}; playing it anyway");
                Ok(())
            }
        }
    }

    /// Crown a normal piece standing on its owner's far rank.
    fn promote(&mut self, idx: TileIndex) -> Result<(Piece, bool), DraughtsError> {
        let piece = *self
            .board
            .get(idx)
            .ok_or(BoardError::NotFound(idx))?;
        if piece.is_king || !piece.has_reached_end() {
            return Ok((piece, false));
        }
        let king = piece.crowned();
        self.board.replace(king)?;
        Ok((king, true))
    }

    /// Every legal turn for the side to move.
    pub fn legal_turns(&self) -> Vec<Turn> {
        movegen::legal_turns(&self.board, self.to_move)
    }

    /// The winner, once the side to move has no legal turn left.
    pub fn winner(&self) -> Option<Player> {
        (!movegen::has_legal_turn(&self.board, self.to_move)).then(|| !self.to_move)
    }
}
