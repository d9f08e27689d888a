//! Pseudo-legal move generation and move execution.
//!
//! Destinations obey piece movement and occupancy only. Whether a move
//! leaves the mover's own king attacked is never checked.

mod attacks;
mod sliding;

use crate::{Bitboard, Board, Position};
use peerchess_core::{Color, File, Move, Piece, Rank, Square};
use thiserror::Error;

pub use attacks::{
    king_attacks, king_moves, knight_attacks, knight_moves, pawn_attacks, pawn_moves,
};
pub use sliding::{bishop_moves, queen_moves, rook_moves};

/// Reasons a move request is refused. A refused move never changes the
/// position it was tried on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the {color} piece on {square} cannot move: it is {to_move}'s turn")]
    NotYourTurn {
        square: Square,
        color: Color,
        to_move: Color,
    },

    #[error("{piece} on {from} cannot reach {to}")]
    IllegalDestination {
        piece: Piece,
        from: Square,
        to: Square,
    },

    #[error("pawn move to {0} must name a promotion piece")]
    MissingPromotion(Square),

    #[error("move {0} does not promote a pawn")]
    UnexpectedPromotion(Move),

    #[error("pawns cannot promote to a {0}")]
    InvalidPromotionPiece(Piece),
}

/// Destination pattern of `piece` standing on `from`.
pub fn piece_moves(piece: Piece, from: Bitboard, color: Color, board: &Board) -> Bitboard {
    match piece {
        Piece::Pawn => pawn_moves(from, color, board),
        Piece::Knight => knight_moves(from, color, board),
        Piece::Bishop => bishop_moves(from, color, board),
        Piece::Rook => rook_moves(from, color, board),
        Piece::Queen => queen_moves(from, color, board),
        Piece::King => king_moves(from, color, board),
    }
}

/// The en passant target, if a pawn of `color` on `from` attacks it.
pub fn en_passant_moves(from: Bitboard, color: Color, target: Option<Square>) -> Bitboard {
    match target {
        Some(sq) => pawn_attacks(from, color) & Bitboard::from_square(sq),
        None => Bitboard::EMPTY,
    }
}

const fn king_home(color: Color) -> Square {
    Square::new(File::E, color.back_rank())
}

/// King and rook squares for one castling move:
/// (king destination, rook start, rook destination, squares that must be empty).
fn castling_squares(color: Color, kingside: bool) -> (Square, Square, Square, Bitboard) {
    let rank = color.back_rank();
    let at = |file| Square::new(file, rank);
    if kingside {
        let between: Bitboard = [at(File::F), at(File::G)].into_iter().collect();
        (at(File::G), at(File::H), at(File::F), between)
    } else {
        let between: Bitboard = [at(File::B), at(File::C), at(File::D)].into_iter().collect();
        (at(File::C), at(File::A), at(File::D), between)
    }
}

/// Castling destinations for a king of `color` on `from`.
///
/// Requires the king on its home square, the matching right, the rook on
/// its corner and an empty path between them. Attacks on the king's path
/// are not examined.
pub fn castling_moves(from: Bitboard, color: Color, position: &Position) -> Bitboard {
    if from != Bitboard::from_square(king_home(color)) {
        return Bitboard::EMPTY;
    }
    let rooks = position.board.pieces(Piece::Rook, color);
    let occupied = position.board.occupied();

    let mut moves = Bitboard::EMPTY;
    for kingside in [true, false] {
        let allowed = if kingside {
            position.castling.can_castle_kingside(color)
        } else {
            position.castling.can_castle_queenside(color)
        };
        let (king_to, rook_from, _, between) = castling_squares(color, kingside);
        if allowed && rooks.contains(rook_from) && (occupied & between).is_empty() {
            moves.set(king_to);
        }
    }
    moves
}

/// All pseudo-legal destinations of the piece on `sq`.
pub fn destinations(position: &Position, sq: Square) -> Result<Bitboard, MoveError> {
    let (piece, color) = position
        .board
        .piece_at(sq)
        .ok_or(MoveError::EmptySquare(sq))?;
    let from = Bitboard::from_square(sq);

    let mut moves = piece_moves(piece, from, color, &position.board);
    match piece {
        Piece::Pawn if color == position.side_to_move => {
            moves |= en_passant_moves(from, color, position.en_passant);
        }
        Piece::King => moves |= castling_moves(from, color, position),
        _ => {}
    }
    Ok(moves)
}

/// Returns true if moving the piece on `from` to `to` is a pawn reaching
/// its last rank, so the caller must pick a promotion piece.
pub fn is_promotion(position: &Position, from: Square, to: Square) -> bool {
    match position.board.piece_at(from) {
        Some((Piece::Pawn, color)) => to.rank() == color.promotion_rank(),
        _ => false,
    }
}

/// Validates `m` against `position` and returns the position after it.
///
/// Captures, en passant, castling rook transfer, promotion, castling rights,
/// the en passant target, both clocks and the side to move are all updated
/// on a copy, so the input is untouched whether or not the move is accepted.
pub fn make_move(position: &Position, m: Move) -> Result<Position, MoveError> {
    let us = position.side_to_move;
    let them = us.opposite();
    let (piece, color) = position
        .board
        .piece_at(m.from)
        .ok_or(MoveError::EmptySquare(m.from))?;

    if color != us {
        return Err(MoveError::NotYourTurn {
            square: m.from,
            color,
            to_move: us,
        });
    }
    if !destinations(position, m.from)?.contains(m.to) {
        return Err(MoveError::IllegalDestination {
            piece,
            from: m.from,
            to: m.to,
        });
    }
    match (is_promotion(position, m.from, m.to), m.promotion) {
        (true, None) => return Err(MoveError::MissingPromotion(m.to)),
        (true, Some(p)) if !p.is_promotion_target() => {
            return Err(MoveError::InvalidPromotionPiece(p))
        }
        (false, Some(_)) => return Err(MoveError::UnexpectedPromotion(m)),
        _ => {}
    }

    let mut new_pos = position.clone();

    // Destinations never include our own pieces, so anything here is theirs
    let mut is_capture = new_pos.board.remove(m.to).is_some();

    if piece == Piece::Pawn && position.en_passant == Some(m.to) {
        let victim = m.to.with_rank(m.from.rank());
        if new_pos.board.pieces(Piece::Pawn, them).contains(victim) {
            new_pos.board.remove(victim);
            is_capture = true;
        }
    }

    if piece == Piece::King && m.from == king_home(us) {
        let distance = m.to.file().index().abs_diff(m.from.file().index());
        if distance == 2 {
            let kingside = m.to.file() == File::G;
            let (_, rook_from, rook_to, _) = castling_squares(us, kingside);
            new_pos.board.relocate(rook_from, rook_to, Piece::Rook);
        }
    }

    new_pos
        .board
        .relocate(m.from, m.to, m.promotion.unwrap_or(piece));

    // King move removes all castling rights for that color
    if piece == Piece::King {
        new_pos.castling.remove_color(us);
    }
    // Anything leaving or landing on a rook corner kills that corner's right
    for sq in [m.from, m.to] {
        match sq {
            Square::H1 => new_pos.castling.remove_kingside(Color::White),
            Square::A1 => new_pos.castling.remove_queenside(Color::White),
            Square::H8 => new_pos.castling.remove_kingside(Color::Black),
            Square::A8 => new_pos.castling.remove_queenside(Color::Black),
            _ => {}
        }
    }

    new_pos.en_passant = double_push_target(piece, m.from, m.to);

    if piece == Piece::Pawn || is_capture {
        new_pos.halfmove_clock = 0;
    } else {
        new_pos.halfmove_clock = new_pos.halfmove_clock.saturating_add(1);
    }
    if us == Color::Black {
        new_pos.fullmove_number = new_pos.fullmove_number.saturating_add(1);
    }
    new_pos.side_to_move = them;

    Ok(new_pos)
}

/// Square skipped by a pawn double push, if this move is one.
fn double_push_target(piece: Piece, from: Square, to: Square) -> Option<Square> {
    if piece != Piece::Pawn || from.rank().index().abs_diff(to.rank().index()) != 2 {
        return None;
    }
    let between = Rank::from_index((from.rank().index() + to.rank().index()) / 2)?;
    Some(from.with_rank(between))
}
