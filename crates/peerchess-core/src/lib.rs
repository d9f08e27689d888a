//! Core types for peerchess.
//!
//! This crate provides the board vocabulary shared by the engine and its
//! front ends:
//! - [`Piece`] and [`Color`] for piece descriptors
//! - [`Square`], [`File`], and [`Rank`] plus the algebraic square codec
//! - [`Move`] for move requests
//! - [`CastlingRights`] and FEN record parsing

mod castling;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use color::Color;
pub use fen::{FenError, FenParser, PlacementToken};
pub use mov::{Move, MoveParseError};
pub use piece::Piece;
pub use square::{File, Rank, Square, SquareError};
