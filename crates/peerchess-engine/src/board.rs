//! Piece placement: one bitboard per colored piece type.

use std::fmt;

use peerchess_core::{Color, File, Piece, Rank, Square};
use thiserror::Error;

use crate::Bitboard;

/// Errors raised when editing a board directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),
}

/// Placement of all pieces on the board.
///
/// Only the twelve per-piece bitboards are stored. The per-color and
/// all-occupied sets are recomputed from them on every call, so they can
/// never drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    pieces: [[Bitboard; 6]; 2],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
        }
    }

    /// Creates the standard starting placement.
    pub const fn startpos() -> Self {
        // Pawn, knight, bishop, rook, queen, king on White's side
        const WHITE: [u64; 6] = [0xFF00, 0x42, 0x24, 0x81, 0x10, 0x08];
        let mut pieces = [[Bitboard::EMPTY; 6]; 2];
        let mut i = 0;
        while i < 6 {
            pieces[0][i] = Bitboard(WHITE[i]);
            // mirror rank 1 onto rank 8 and rank 2 onto rank 7
            pieces[1][i] = Bitboard(WHITE[i].swap_bytes());
            i += 1;
        }
        Board { pieces }
    }

    /// Returns the squares holding `piece` of `color`.
    #[inline]
    pub fn pieces(&self, piece: Piece, color: Color) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Returns every square occupied by `color`.
    #[inline]
    pub fn color(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.color(Color::White) | self.color(Color::Black)
    }

    /// Returns a bitboard of all empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    /// Returns the piece and color at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        for color in Color::ALL {
            for piece in Piece::ALL {
                if self.pieces(piece, color).contains(sq) {
                    return Some((piece, color));
                }
            }
        }
        None
    }

    /// Places a piece on an empty square.
    pub fn put(&mut self, sq: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if self.occupied().contains(sq) {
            return Err(BoardError::SquareOccupied(sq));
        }
        self.pieces[color.index()][piece.index()].set(sq);
        Ok(())
    }

    /// Removes and returns whatever stands on `sq`.
    pub fn remove(&mut self, sq: Square) -> Option<(Piece, Color)> {
        let found = self.piece_at(sq)?;
        self.pieces[found.1.index()][found.0.index()].clear(sq);
        Some(found)
    }

    /// Moves the piece on `from` to the empty square `to`, changing it into
    /// `becomes` on arrival.
    pub(crate) fn relocate(&mut self, from: Square, to: Square, becomes: Piece) {
        if let Some((_, color)) = self.remove(from) {
            self.pieces[color.index()][becomes.index()].set(to);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", rank)?;
            for file in File::ALL {
                let c = match self.piece_at(Square::new(file, *rank)) {
                    Some((piece, color)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
