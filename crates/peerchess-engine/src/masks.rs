//! File and rank mask tables.
//!
//! Shifting a bitboard sideways carries squares off one edge of the board
//! onto the opposite edge of the neighbouring rank. Generators AND their
//! shifted sets with the complement of the file(s) such a wrap would land on.

use crate::Bitboard;
use peerchess_core::{File, Rank};

const H_FILE_BITS: u64 = 0x0101_0101_0101_0101;
const RANK_1_BITS: u64 = 0x0000_0000_0000_00FF;

/// File masks indexed by [`File::index`] (a-file first).
pub const FILES: [Bitboard; 8] = compute_files();

/// Rank masks indexed by [`Rank::index`] (rank 1 first).
pub const RANKS: [Bitboard; 8] = compute_ranks();

pub const NOT_FILE_A: Bitboard = exclude_files(&[File::A]);
pub const NOT_FILE_H: Bitboard = exclude_files(&[File::H]);
pub const NOT_FILE_AB: Bitboard = exclude_files(&[File::A, File::B]);
pub const NOT_FILE_GH: Bitboard = exclude_files(&[File::G, File::H]);

const fn compute_files() -> [Bitboard; 8] {
    let mut files = [Bitboard::EMPTY; 8];
    let mut i = 0;
    while i < 8 {
        files[i] = Bitboard(H_FILE_BITS << (7 - i));
        i += 1;
    }
    files
}

const fn compute_ranks() -> [Bitboard; 8] {
    let mut ranks = [Bitboard::EMPTY; 8];
    let mut i = 0;
    while i < 8 {
        ranks[i] = Bitboard(RANK_1_BITS << (8 * i));
        i += 1;
    }
    ranks
}

/// Returns the mask of every square on `file`.
#[inline]
pub const fn file_mask(file: File) -> Bitboard {
    FILES[file.index() as usize]
}

/// Returns the mask of every square on `rank`.
#[inline]
pub const fn rank_mask(rank: Rank) -> Bitboard {
    RANKS[rank.index() as usize]
}

/// Returns every square that is not on one of `files`.
pub const fn exclude_files(files: &[File]) -> Bitboard {
    let mut covered = 0u64;
    let mut i = 0;
    while i < files.len() {
        covered |= file_mask(files[i]).0;
        i += 1;
    }
    Bitboard(!covered)
}
