//! Bitboard representation and operations.
//!
//! A bitboard is a 64-bit set of squares. Bit `8 * rank + (7 - file)` stands
//! for a square, so h1 is the least significant bit and a8 the most
//! significant one. Moving toward rank 8 is a left shift by 8, toward the
//! a-file a left shift by 1, toward the h-file a right shift by 1.

use peerchess_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::masks;

/// A set of board squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Full bitboard (all squares set).
    pub const FULL: Bitboard = Bitboard(!0);

    /// Creates a bitboard from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Creates a bitboard with a single square set.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(sq.bitboard())
    }

    /// Returns true if the bitboard is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the bit at `index`. Indices past 63 name no square and read
    /// as unset.
    #[inline]
    pub const fn get_bit(self, index: u32) -> bool {
        match self.0.checked_shr(index) {
            Some(bits) => bits & 1 == 1,
            None => false,
        }
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & sq.bitboard()) != 0
    }

    /// Sets the given square.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= sq.bitboard();
    }

    /// Clears the given square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !sq.bitboard();
    }

    /// Shifts every square `n` bits toward a8.
    ///
    /// Bits pushed past index 63 are dropped; a shift of 64 or more yields
    /// [`Bitboard::EMPTY`].
    #[inline]
    pub const fn shift_left(self, n: u32) -> Bitboard {
        match self.0.checked_shl(n) {
            Some(bits) => Bitboard(bits),
            None => Bitboard::EMPTY,
        }
    }

    /// Shifts every square `n` bits toward h1.
    ///
    /// Bits pushed below index 0 are dropped; a shift of 64 or more yields
    /// [`Bitboard::EMPTY`].
    #[inline]
    pub const fn shift_right(self, n: u32) -> Bitboard {
        match self.0.checked_shr(n) {
            Some(bits) => Bitboard(bits),
            None => Bitboard::EMPTY,
        }
    }

    /// Pops and returns the lowest-index square.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(sq)
        }
    }

    /// Returns the set squares in ascending bit-index order: rank 1 to
    /// rank 8, and within a rank from the h-file to the a-file.
    pub fn squares(self) -> Vec<Square> {
        self.into_iter().collect()
    }

    /// Shifts the bitboard north (toward rank 8).
    #[inline]
    pub const fn north(self) -> Bitboard {
        self.shift_left(8)
    }

    /// Shifts the bitboard south (toward rank 1).
    #[inline]
    pub const fn south(self) -> Bitboard {
        self.shift_right(8)
    }

    /// Shifts the bitboard east (toward file H).
    #[inline]
    pub const fn east(self) -> Bitboard {
        Bitboard(self.shift_right(1).0 & masks::NOT_FILE_A.0)
    }

    /// Shifts the bitboard west (toward file A).
    #[inline]
    pub const fn west(self) -> Bitboard {
        Bitboard(self.shift_left(1).0 & masks::NOT_FILE_H.0)
    }

    /// Shifts the bitboard northeast.
    #[inline]
    pub const fn north_east(self) -> Bitboard {
        Bitboard(self.shift_left(7).0 & masks::NOT_FILE_A.0)
    }

    /// Shifts the bitboard northwest.
    #[inline]
    pub const fn north_west(self) -> Bitboard {
        Bitboard(self.shift_left(9).0 & masks::NOT_FILE_H.0)
    }

    /// Shifts the bitboard southeast.
    #[inline]
    pub const fn south_east(self) -> Bitboard {
        Bitboard(self.shift_right(9).0 & masks::NOT_FILE_A.0)
    }

    /// Shifts the bitboard southwest.
    #[inline]
    pub const fn south_west(self) -> Bitboard {
        Bitboard(self.shift_right(7).0 & masks::NOT_FILE_H.0)
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.set(sq);
        }
        bb
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl Shl<u32> for Bitboard {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self::Output {
        self.shift_left(n)
    }
}

impl Shr<u32> for Bitboard {
    type Output = Self;
    #[inline]
    fn shr(self, n: u32) -> Self::Output {
        self.shift_right(n)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for rank in (0..8u32).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u32 {
                if self.get_bit(rank * 8 + (7 - file)) {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Iterator over set squares in a bitboard.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peerchess_core::{File, Rank};
    use proptest::prelude::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn bitboard_from_square() {
        let bb = Bitboard::from_square(Square::H1);
        assert_eq!(bb.0, 1);
        assert!(bb.contains(Square::H1));
        assert!(!bb.contains(Square::G1));
        assert_eq!(Bitboard::from_square(Square::A1).0, 0x80);
    }

    #[test]
    fn bitboard_count() {
        assert_eq!(Bitboard::EMPTY.count(), 0);
        assert_eq!(Bitboard::FULL.count(), 64);
        assert!(Bitboard::EMPTY.is_empty());
        assert!(!Bitboard::FULL.is_empty());
    }

    #[test]
    fn bitwise_operators() {
        let a = Bitboard::new(0b1100);
        let b = Bitboard::new(0b1010);
        assert_eq!(a & b, Bitboard::new(0b1000));
        assert_eq!(a | b, Bitboard::new(0b1110));
        assert_eq!(a ^ b, Bitboard::new(0b0110));
        assert_eq!(!Bitboard::EMPTY, Bitboard::FULL);
    }

    #[test]
    fn get_bit() {
        let bb = Bitboard::from_square(sq("e4"));
        assert!(bb.get_bit(27));
        assert!(!bb.get_bit(28));
        assert!(!Bitboard::FULL.get_bit(64));
        assert!(!Bitboard::FULL.get_bit(u32::MAX));
    }

    #[test]
    fn shifts_cross_the_rank_four_boundary() {
        let e4 = Bitboard::from_square(sq("e4"));
        assert_eq!(e4.north(), Bitboard::from_square(sq("e5")));
        assert_eq!(e4.north().south(), e4);
        assert_eq!(e4 << 32, Bitboard::from_square(sq("e8")));
        assert_eq!((e4 << 32) >> 32, e4);
    }

    #[test]
    fn oversized_shifts_are_empty() {
        assert_eq!(Bitboard::FULL.shift_left(64), Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL.shift_right(64), Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL.shift_left(200), Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL.shift_left(63), Bitboard::from_square(Square::A8));
        assert_eq!(Bitboard::FULL.shift_right(63), Bitboard::from_square(Square::H1));
    }

    #[test]
    fn direction_shifts() {
        let d4 = Bitboard::from_square(sq("d4"));
        assert_eq!(d4.north(), Bitboard::from_square(sq("d5")));
        assert_eq!(d4.south(), Bitboard::from_square(sq("d3")));
        assert_eq!(d4.east(), Bitboard::from_square(sq("e4")));
        assert_eq!(d4.west(), Bitboard::from_square(sq("c4")));
        assert_eq!(d4.north_east(), Bitboard::from_square(sq("e5")));
        assert_eq!(d4.north_west(), Bitboard::from_square(sq("c5")));
        assert_eq!(d4.south_east(), Bitboard::from_square(sq("e3")));
        assert_eq!(d4.south_west(), Bitboard::from_square(sq("c3")));
    }

    #[test]
    fn direction_shifts_do_not_wrap() {
        let a4 = Bitboard::from_square(sq("a4"));
        let h4 = Bitboard::from_square(sq("h4"));
        assert!(a4.west().is_empty());
        assert!(a4.north_west().is_empty());
        assert!(a4.south_west().is_empty());
        assert!(h4.east().is_empty());
        assert!(h4.north_east().is_empty());
        assert!(h4.south_east().is_empty());
        assert!(Bitboard::from_square(Square::A8).north().is_empty());
        assert!(Bitboard::from_square(Square::H1).south().is_empty());
    }

    #[test]
    fn bitboard_iterator_order() {
        let bb: Bitboard = [sq("a1"), sq("h1"), sq("e8"), sq("b2")].into_iter().collect();
        let names: Vec<String> = bb.squares().iter().map(|s| s.to_algebraic()).collect();
        assert_eq!(names, vec!["h1", "a1", "b2", "e8"]);
        assert_eq!(bb.into_iter().size_hint(), (4, Some(4)));
    }

    #[test]
    fn bitboard_pop_lsb() {
        let mut bb = Bitboard::new(0b1010);
        assert_eq!(bb.pop_lsb(), Some(Square::G1));
        assert_eq!(bb.pop_lsb(), Some(Square::E1));
        assert_eq!(bb.pop_lsb(), None);
    }

    #[test]
    fn debug_diagram() {
        let bb = Bitboard::from_square(Square::new(File::A, Rank::R8));
        let text = format!("{:?}", bb);
        assert!(text.contains("8 X . . . . . . . "));
        assert!(text.ends_with("  a b c d e f g h\n"));
    }

    proptest! {
        #[test]
        fn shift_roundtrip_drops_only_out_of_range_bits(bits: u64, n in 0u32..64) {
            let v = Bitboard(bits);
            let kept = if n == 0 { u64::MAX } else { u64::MAX >> n };
            prop_assert_eq!((v << n) >> n, Bitboard(bits & kept));
            let kept = if n == 0 { u64::MAX } else { u64::MAX << n };
            prop_assert_eq!((v >> n) << n, Bitboard(bits & kept));
        }
    }
}
