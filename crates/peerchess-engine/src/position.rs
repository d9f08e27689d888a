//! Game record: piece placement plus the FEN metadata fields.

use peerchess_core::{
    CastlingRights, Color, FenError, FenParser, File, Move, Piece, PlacementToken, Rank, Square,
};

use crate::movegen::{self, MoveError};
use crate::{Bitboard, Board};

/// Complete position state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Placement of every piece.
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square (if any).
    pub en_passant: Option<Square>,

    /// Halfmove clock for 50-move rule.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl Position {
    /// Creates an empty position.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            castling: CastlingRights::ALL,
            ..Self::empty()
        }
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Self::from_record(&parsed)
    }

    /// Builds a position from a parsed FEN record.
    fn from_record(record: &FenParser) -> Result<Self, FenError> {
        let mut board = Board::empty();

        // Tokens run a8..h8, a7..h7, ..., a1..h1
        let mut cursor = 0u8;
        for token in record.placement() {
            match token {
                PlacementToken::Empty(n) => cursor = cursor.saturating_add(n),
                PlacementToken::Piece(piece, color) => {
                    let sq = placement_square(cursor).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!(
                            "more than 64 squares in {}",
                            record.piece_placement
                        ))
                    })?;
                    board
                        .put(sq, piece, color)
                        .map_err(|e| FenError::InvalidPiecePlacement(e.to_string()))?;
                    cursor = cursor.saturating_add(1);
                }
            }
        }

        Ok(Position {
            board,
            side_to_move: record.active_color,
            castling: record.castling,
            en_passant: record.en_passant,
            halfmove_clock: record.halfmove_clock,
            fullmove_number: record.fullmove_number,
        })
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in Rank::ALL.iter().rev() {
            let mut empty_count = 0;
            for file in File::ALL {
                if let Some((piece, color)) = self.piece_at(Square::new(file, *rank)) {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char(color));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if *rank != Rank::R1 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.side_to_move.to_fen_char());

        fen.push(' ');
        fen.push_str(&self.castling.to_fen());

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());

        fen
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.board.piece_at(sq)
    }

    /// Returns a bitboard of pieces of the given type and color.
    #[inline]
    pub fn pieces_of(&self, piece: Piece, color: Color) -> Bitboard {
        self.board.pieces(piece, color)
    }

    /// Pseudo-legal destinations of the piece on `sq`.
    pub fn destinations(&self, sq: Square) -> Result<Bitboard, MoveError> {
        movegen::destinations(self, sq)
    }

    /// Returns true if `from` -> `to` moves a pawn onto its last rank.
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        movegen::is_promotion(self, from, to)
    }

    /// Applies `m` in place. On error the position is left as it was.
    pub fn make_move(&mut self, m: Move) -> Result<(), MoveError> {
        *self = movegen::make_move(self, m)?;
        Ok(())
    }
}

/// Square of the `cursor`-th placement token position, counting a8 as 0
/// and h1 as 63.
fn placement_square(cursor: u8) -> Option<Square> {
    let file = File::from_index(cursor % 8)?;
    let rank = Rank::from_index(7u8.checked_sub(cursor / 8)?)?;
    Some(Square::new(file, rank))
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
