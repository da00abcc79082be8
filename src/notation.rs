//! Move notation.
//!
//! - `32-28`: a step from 32 to 28
//! - `28x17x8x19`: a capture series through every listed tile
//! - `exit`: end the game
//!
//! Indices are one or two digits (`05-10` is fine). Surrounding whitespace is
//! ignored.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::NotationError;
use crate::geometry::{is_tile_index, TileIndex};
use crate::moves::{CaptureSeries, Move};

lazy_static! {
    static ref STEP: Regex = Regex::new(r"^(\d{1,2})-(\d{1,2})$").unwrap();
    static ref CAPTURE: Regex = Regex::new(r"^\d{1,2}(?:x\d{1,2})+$").unwrap();
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Step(Move),
    Capture(CaptureSeries),
    Exit,
}

fn tile(digits: &str) -> Result<TileIndex, NotationError> {
    let n: u32 = digits
        .parse()
        .map_err(|_| NotationError::InvalidFormat(digits.to_string()))?;
    if !is_tile_index(n) {
        return Err(NotationError::TileOutOfRange(n));
    }
    Ok(n as TileIndex)
}

/// Parse one command.
///
/// # Errors
/// - `InvalidFormat` if the text is neither a step, a capture nor `exit`
/// - `TileOutOfRange` for an index outside 1-50
pub fn parse_command(input: &str) -> Result<Command, NotationError> {
    let text = input.trim();
    if text.eq_ignore_ascii_case("exit") {
        return Ok(Command::Exit);
    }

    if let Some(caps) = STEP.captures(text) {
        let start = tile(&caps[1])?;
        let end = tile(&caps[2])?;
        return Ok(Command::Step(Move::new(start, end)));
    }

    if CAPTURE.is_match(text) {
        let tiles = text.split('x').map(tile).collect::<Result<Vec<_>, _>>()?;
        return CaptureSeries::from_tiles(&tiles)
            .map(Command::Capture)
            .ok_or_else(|| NotationError::InvalidFormat(text.to_string()));
    }

    Err(NotationError::InvalidFormat(text.to_string()))
}

impl FromStr for Command {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}
