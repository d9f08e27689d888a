//! Ray casting for bishops, rooks, and queens.

use crate::{Bitboard, Board};
use peerchess_core::Color;

type Step = fn(Bitboard) -> Bitboard;

const DIAGONAL_STEPS: [Step; 4] = [
    Bitboard::north_east,
    Bitboard::north_west,
    Bitboard::south_east,
    Bitboard::south_west,
];

const ORTHOGONAL_STEPS: [Step; 4] = [
    Bitboard::north,
    Bitboard::south,
    Bitboard::east,
    Bitboard::west,
];

/// Walks `step` from `from` until every ray has left the board, hit one of
/// `own` pieces (excluded), or hit one of `their` pieces (included).
fn cast(from: Bitboard, step: Step, own: Bitboard, their: Bitboard) -> Bitboard {
    let mut reached = Bitboard::EMPTY;
    let mut frontier = from;
    loop {
        frontier = step(frontier) & !own;
        reached |= frontier;
        // a capture ends the ray
        frontier &= !their;
        if frontier.is_empty() {
            return reached;
        }
    }
}

fn slide(from: Bitboard, color: Color, board: &Board, steps: &[Step]) -> Bitboard {
    let own = board.color(color);
    let their = board.color(color.opposite());
    steps
        .iter()
        .fold(Bitboard::EMPTY, |acc, &step| acc | cast(from, step, own, their))
}

/// Diagonal slides up to and including the first enemy piece.
pub fn bishop_moves(from: Bitboard, color: Color, board: &Board) -> Bitboard {
    slide(from, color, board, &DIAGONAL_STEPS)
}

/// Orthogonal slides up to and including the first enemy piece.
pub fn rook_moves(from: Bitboard, color: Color, board: &Board) -> Bitboard {
    slide(from, color, board, &ORTHOGONAL_STEPS)
}

/// Union of the bishop and rook patterns.
pub fn queen_moves(from: Bitboard, color: Color, board: &Board) -> Bitboard {
    bishop_moves(from, color, board) | rook_moves(from, color, board)
}
