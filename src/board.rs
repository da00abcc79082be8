//! The board: every piece in play, ordered by tile index.
//!
//! The ordering is kept on every insertion, so two boards holding the same
//! pieces compare (and hash) equal regardless of how they got there.

use std::fmt;

use crate::constants::{
    GLYPH_DARK, GLYPH_LIGHT, GLYPH_ONE, GLYPH_ONE_KING, GLYPH_TWO, GLYPH_TWO_KING, N,
    PLAYER_ONE_START, PLAYER_TWO_START, TILE_COUNT,
};
use crate::error::{BoardError, DraughtsError};
use crate::geometry::{is_tile_index, tile_index_of, TileIndex};
use crate::moves::{CaptureSeries, Move};
use crate::piece::{Piece, Player};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    /// Set up a board from the tiles of each player's pieces.
    ///
    /// Any tile listed in `kings` holds a king, whichever side owns it.
    ///
    /// # Errors
    /// - `Overlap` if both players have a piece on the same tile
    /// - `Duplicate` if a player lists a tile twice
    /// - `InvalidTile` for an index outside 1-50
    pub fn new(
        p1_pieces: &[TileIndex],
        p2_pieces: &[TileIndex],
        kings: &[TileIndex],
    ) -> Result<Self, BoardError> {
        if let Some(&idx) = p1_pieces.iter().find(|i| p2_pieces.contains(i)) {
            return Err(BoardError::Overlap(idx));
        }

        let mut board = Board::default();
        for (owner, tiles) in [(Player::One, p1_pieces), (Player::Two, p2_pieces)] {
            for &idx in tiles {
                if !is_tile_index(idx as u32) {
                    return Err(BoardError::InvalidTile(idx));
                }
                if board.insert(Piece::new(idx, owner, kings.contains(&idx))).is_some() {
                    return Err(BoardError::Duplicate(idx));
                }
            }
        }
        Ok(board)
    }

    /// The standard opening position: player two on 1-20, player one on 31-50.
    pub fn standard() -> Self {
        let pieces = PLAYER_TWO_START
            .map(|i| Piece::new(i, Player::Two, false))
            .chain(PLAYER_ONE_START.map(|i| Piece::new(i, Player::One, false)))
            .collect();
        Self { pieces }
    }

    fn slot(&self, idx: TileIndex) -> Result<usize, usize> {
        self.pieces.binary_search_by_key(&idx, |p| p.position)
    }

    /// The piece on `idx`, if any.
    pub fn get(&self, idx: TileIndex) -> Option<&Piece> {
        self.slot(idx).ok().map(|i| &self.pieces[i])
    }

    pub fn contains(&self, idx: TileIndex) -> bool {
        self.slot(idx).is_ok()
    }

    /// Owner of the piece on `idx`, if any.
    pub fn owner_at(&self, idx: TileIndex) -> Option<Player> {
        self.get(idx).map(|p| p.owner)
    }

    /// All pieces in tile order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.owner == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Remove and return the piece on `idx`.
    ///
    /// # Errors
    /// `NotFound` if the tile is empty.
    pub fn pop(&mut self, idx: TileIndex) -> Result<Piece, BoardError> {
        match self.slot(idx) {
            Ok(i) => Ok(self.pieces.remove(i)),
            Err(_) => Err(BoardError::NotFound(idx)),
        }
    }

    /// Put `piece` on its tile, keeping tile order. A piece already on that
    /// tile is displaced and returned.
    pub fn insert(&mut self, piece: Piece) -> Option<Piece> {
        match self.slot(piece.position) {
            Ok(i) => Some(std::mem::replace(&mut self.pieces[i], piece)),
            Err(i) => {
                self.pieces.insert(i, piece);
                None
            }
        }
    }

    /// Swap the piece on `piece.position` for `piece`.
    ///
    /// # Errors
    /// `NotFound` if the tile is empty.
    pub fn replace(&mut self, piece: Piece) -> Result<Piece, BoardError> {
        let old = self.pop(piece.position)?;
        self.insert(piece);
        Ok(old)
    }

    /// Move the piece on `mv.start` to `mv.end`. Legality is the caller's
    /// business.
    pub fn apply_step(&mut self, mv: &Move) -> Result<&mut Self, BoardError> {
        let piece = self.pop(mv.start)?;
        self.insert(piece.relocated(mv.end));
        Ok(self)
    }

    /// Play a capture series: the piece on the first tile lands on the last
    /// one and every piece on the way is removed. Returns the removed pieces.
    ///
    /// Legality (including maximality) is the caller's business. The board is
    /// left untouched if the series is off-axis or its start is empty.
    pub fn apply_captures(&mut self, series: &CaptureSeries) -> Result<Vec<Piece>, DraughtsError> {
        let mut visited = Vec::new();
        for mv in series {
            visited.extend(mv.path()?);
        }

        let mover = self.pop(series.start())?;
        let (captured, kept): (Vec<Piece>, Vec<Piece>) = std::mem::take(&mut self.pieces)
            .into_iter()
            .partition(|p| visited.contains(&p.position));
        self.pieces = kept;
        self.insert(mover.relocated(series.end()));
        Ok(captured)
    }
}

/// Two-character cell for a tile.
fn glyph(piece: Option<&Piece>) -> &'static str {
    match piece {
        Some(p) => match (p.owner, p.is_king) {
            (Player::One, false) => GLYPH_ONE,
            (Player::One, true) => GLYPH_ONE_KING,
            (Player::Two, false) => GLYPH_TWO,
            (Player::Two, true) => GLYPH_TWO_KING,
        },
        None => GLYPH_DARK,
    }
}

/// Draw a 10x10 grid, filling dark squares with `cell(index)`.
fn draw_grid(f: &mut impl fmt::Write, cell: impl Fn(TileIndex) -> String) -> fmt::Result {
    for row in 0..N {
        write!(f, "|")?;
        for col in 0..N {
            match tile_index_of(row, col) {
                Ok(idx) => write!(f, "{}|", cell(idx))?,
                Err(_) => write!(f, "{GLYPH_LIGHT}|")?,
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

/// The numbering reference: every dark square labelled with its index.
pub fn render_tile_indices() -> String {
    let mut out = String::with_capacity(TILE_COUNT as usize * 8);
    // Writing into a String cannot fail.
    let _ = draw_grid(&mut out, |idx| format!("{idx:02}"));
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw_grid(f, |idx| glyph(self.get(idx)).to_string())
    }
}
