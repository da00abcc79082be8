//! draughts-rust: an international draughts rules engine.
//!
//! This crate keeps the state of a game on the 10x10 board, checks submitted
//! moves against the full rule set (including the rule that the longest
//! available capture must be played) and applies the accepted ones.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, engine bounds and rendering glyphs
//! - [`geometry`] - Tile numbering (1-50) and coordinates
//! - [`moves`] - Moves, their paths, and capture series
//! - [`piece`] - Players and pieces
//! - [`board`] - The pieces in play
//! - [`rules`] - Step and capture legality
//! - [`max_capture`] - The longest capture available to a player
//! - [`movegen`] - Every legal turn in a position
//! - [`notation`] - Parsing `32-28` / `28x17x8` commands
//! - [`game`] - Turn order, validation and promotion
//! - [`playout`] - Random self-play
//! - [`sample`] - A recorded game
//! - [`repl`] - Terminal prompt
//!
//! ## Example
//!
//! ```
//! use draughts_rust::board::Board;
//! use draughts_rust::max_capture::compute_max_capture;
//! use draughts_rust::piece::Player;
//!
//! let board = Board::new(&[28, 44, 27], &[22, 12, 13], &[]).unwrap();
//! assert_eq!(compute_max_capture(&board, Player::One), 3);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod geometry;
pub mod max_capture;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod playout;
pub mod repl;
pub mod rules;
pub mod sample;

pub use error::DraughtsError;
pub use game::{CapturePolicy, Game, GameConfig, Outcome};
