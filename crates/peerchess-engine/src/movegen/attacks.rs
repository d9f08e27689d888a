//! Step patterns for pawns, knights, and kings.
//!
//! Every generator takes the mover's squares as a bitboard (normally a
//! single square), the mover's color, and the board it stands on, and
//! returns the destinations the pattern reaches. None of them look at king
//! safety.

use crate::masks::{rank_mask, NOT_FILE_A, NOT_FILE_AB, NOT_FILE_GH, NOT_FILE_H};
use crate::{Bitboard, Board};
use peerchess_core::Color;

/// Squares a pawn of `color` on `from` attacks diagonally, occupied or not.
#[inline]
pub fn pawn_attacks(from: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => from.north_east() | from.north_west(),
        Color::Black => from.south_east() | from.south_west(),
    }
}

/// Pawn pushes onto empty squares plus diagonal captures of enemy pieces.
pub fn pawn_moves(from: Bitboard, color: Color, board: &Board) -> Bitboard {
    let empty = board.empty_squares();
    let their_pieces = board.color(color.opposite());
    let on_home_rank = from & rank_mask(color.pawn_rank());

    let (single, double) = match color {
        Color::White => (
            from.north() & empty,
            (on_home_rank.north() & empty).north() & empty,
        ),
        Color::Black => (
            from.south() & empty,
            (on_home_rank.south() & empty).south() & empty,
        ),
    };

    single | double | (pawn_attacks(from, color) & their_pieces)
}

/// Squares a knight on `from` jumps to, occupied or not.
pub fn knight_attacks(from: Bitboard) -> Bitboard {
    (from.shift_left(17) & NOT_FILE_H)
        | (from.shift_left(15) & NOT_FILE_A)
        | (from.shift_left(10) & NOT_FILE_GH)
        | (from.shift_left(6) & NOT_FILE_AB)
        | (from.shift_right(17) & NOT_FILE_A)
        | (from.shift_right(15) & NOT_FILE_H)
        | (from.shift_right(10) & NOT_FILE_AB)
        | (from.shift_right(6) & NOT_FILE_GH)
}

/// Knight jumps that do not land on the mover's own pieces.
pub fn knight_moves(from: Bitboard, color: Color, board: &Board) -> Bitboard {
    knight_attacks(from) & !board.color(color)
}

/// The eight squares around `from`.
pub fn king_attacks(from: Bitboard) -> Bitboard {
    from.north()
        | from.south()
        | from.east()
        | from.west()
        | from.north_east()
        | from.north_west()
        | from.south_east()
        | from.south_west()
}

/// Single king steps that do not land on the mover's own pieces.
pub fn king_moves(from: Bitboard, color: Color, board: &Board) -> Bitboard {
    king_attacks(from) & !board.color(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use peerchess_core::{Piece, Square};

    fn bb(names: &[&str]) -> Bitboard {
        names
            .iter()
            .map(|n| Square::from_algebraic(n).unwrap())
            .collect()
    }

    #[test]
    fn knight_attack_counts() {
        assert_eq!(knight_attacks(bb(&["d4"])).count(), 8);
        assert_eq!(knight_attacks(bb(&["a1"])), bb(&["b3", "c2"]));
        assert_eq!(knight_attacks(bb(&["h8"])), bb(&["g6", "f7"]));
        assert_eq!(knight_attacks(bb(&["b1"])), bb(&["a3", "c3", "d2"]));
        assert_eq!(knight_attacks(bb(&["g2"])), bb(&["e1", "e3", "f4", "h4"]));
    }

    #[test]
    fn knight_never_wraps() {
        for index in 0..64u8 {
            let sq = Square::from_index(index).unwrap();
            for to in knight_attacks(Bitboard::from_square(sq)) {
                let df = (sq.file().index() as i8 - to.file().index() as i8).abs();
                let dr = (sq.rank().index() as i8 - to.rank().index() as i8).abs();
                assert!(
                    (df == 1 && dr == 2) || (df == 2 && dr == 1),
                    "{} -> {}",
                    sq,
                    to
                );
            }
        }
    }

    #[test]
    fn king_attack_counts() {
        assert_eq!(king_attacks(bb(&["e4"])).count(), 8);
        assert_eq!(king_attacks(bb(&["a1"])), bb(&["a2", "b1", "b2"]));
        assert_eq!(king_attacks(bb(&["h8"])), bb(&["g8", "g7", "h7"]));
        assert_eq!(king_attacks(bb(&["a5"])).count(), 5);
    }

    #[test]
    fn pawn_attack_edges() {
        assert_eq!(pawn_attacks(bb(&["a2"]), Color::White), bb(&["b3"]));
        assert_eq!(pawn_attacks(bb(&["h7"]), Color::Black), bb(&["g6"]));
        assert_eq!(pawn_attacks(bb(&["d5"]), Color::Black), bb(&["c4", "e4"]));
    }

    #[test]
    fn startpos_pawn_and_knight() {
        let pos = Position::startpos();
        let board = &pos.board;
        assert_eq!(
            pawn_moves(bb(&["e2"]), Color::White, board),
            bb(&["e3", "e4"])
        );
        assert_eq!(
            pawn_moves(bb(&["d7"]), Color::Black, board),
            bb(&["d6", "d5"])
        );
        assert_eq!(
            knight_moves(bb(&["b1"]), Color::White, board),
            bb(&["a3", "c3"])
        );
        assert!(king_moves(bb(&["e1"]), Color::White, board).is_empty());
    }

    #[test]
    fn pawn_blocked_and_captures() {
        let mut board = Board::empty();
        board.put(Square::from_algebraic("e2").unwrap(), Piece::Pawn, Color::White).unwrap();
        board.put(Square::from_algebraic("e4").unwrap(), Piece::Knight, Color::Black).unwrap();
        board.put(Square::from_algebraic("d3").unwrap(), Piece::Bishop, Color::Black).unwrap();
        board.put(Square::from_algebraic("f3").unwrap(), Piece::Bishop, Color::White).unwrap();
        // double push blocked at e4, own bishop on f3 not capturable
        assert_eq!(
            pawn_moves(bb(&["e2"]), Color::White, &board),
            bb(&["e3", "d3"])
        );

        let mut blocked = Board::empty();
        blocked.put(Square::from_algebraic("e3").unwrap(), Piece::Pawn, Color::Black).unwrap();
        assert!(pawn_moves(bb(&["e2"]), Color::White, &blocked).is_empty());
    }

    #[test]
    fn pawn_double_push_only_from_home_rank() {
        let board = Board::empty();
        assert_eq!(pawn_moves(bb(&["e3"]), Color::White, &board), bb(&["e4"]));
        assert_eq!(pawn_moves(bb(&["a6"]), Color::Black, &board), bb(&["a5"]));
    }
}
