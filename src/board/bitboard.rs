//! Bitboard implementation for the 8x8 grid

use super::{Pos, TOTAL_CELLS};

/// One bit per cell, bit index = `row * 8 + col`.
/// The whole board fits in a single `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Wrap raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Raw bits
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | other.bits)
    }

    #[inline]
    pub fn intersection(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & other.bits)
    }

    #[inline]
    pub fn difference(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & !other.bits)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut bb = Bitboard::new();
        for pos in iter {
            bb.set(pos);
        }
        bb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(3, 5);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        bb.clear(pos);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_ones_row_major() {
        let bb: Bitboard = [Pos::new(7, 7), Pos::new(0, 1), Pos::new(2, 0)]
            .into_iter()
            .collect();
        let order: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(order, vec![Pos::new(0, 1), Pos::new(2, 0), Pos::new(7, 7)]);
    }

    #[test]
    fn test_set_operations() {
        let a: Bitboard = [Pos::new(0, 0), Pos::new(1, 1)].into_iter().collect();
        let b: Bitboard = [Pos::new(1, 1), Pos::new(2, 2)].into_iter().collect();
        assert_eq!(a.union(b).count(), 3);
        assert_eq!(a.intersection(b).count(), 1);
        assert_eq!(a.difference(b).iter_ones().collect::<Vec<_>>(), vec![Pos::new(0, 0)]);
    }

    #[test]
    fn test_last_cell() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(7, 7));
        assert_eq!(bb.bits(), 1u64 << 63);
        assert_eq!(bb.iter_ones().next(), Some(Pos::new(7, 7)));
    }
}
