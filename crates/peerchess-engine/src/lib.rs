//! Bitboard chess position and pseudo-legal move generation.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit square set with direction shifts
//! - [`masks`] - file and rank mask tables
//! - [`Board`] - twelve piece bitboards with derived color/occupancy sets
//! - [`Position`] - board plus side to move, castling, en passant and clocks
//! - [`movegen`] - per-piece destination generators and the move executor
//! - [`Game`] - a session over algebraic strings with history and undo
//!
//! Squares are numbered `8 * rank + (7 - file)`, so h1 is bit 0 and a8 is
//! bit 63.
//!
//! # Example
//!
//! ```
//! use peerchess_engine::Game;
//!
//! let mut game = Game::new();
//! assert_eq!(game.find_moves("e2")?, vec!["e3", "e4"]);
//! let fen = game.make_move_uci("e2e4")?;
//! assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! # Ok::<(), peerchess_engine::GameError>(())
//! ```

mod bitboard;
mod board;
mod game;
pub mod masks;
pub mod movegen;
mod position;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::{Board, BoardError};
pub use game::{Game, GameError, GameMove};
pub use movegen::{
    bishop_moves, destinations, is_promotion, king_attacks, king_moves, knight_attacks,
    knight_moves, make_move, pawn_attacks, pawn_moves, queen_moves, rook_moves, MoveError,
};
pub use position::Position;
