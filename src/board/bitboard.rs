//! Bitboard occupancy mask for one side

use super::Pos;

/// One bit per cell, indexed by [`Pos::to_index`] (bit 0 = a1, bit 63 = h8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub const fn bits(&self) -> u64 {
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

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
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
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(3, 4);
        assert!(!bb.get(pos));

        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);

        bb.clear(pos);
        assert!(!bb.get(pos));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_corner_bits() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(0, 0));
        bb.set(Pos::new(7, 7));
        assert_eq!(bb.bits(), 1 | (1 << 63));
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(5, 3));
        bb.set(Pos::new(0, 7));
        bb.set(Pos::new(5, 1));

        let positions: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(
            positions,
            vec![Pos::new(0, 7), Pos::new(5, 1), Pos::new(5, 3)]
        );
        assert_eq!(bb.iter_ones().len(), 3);
    }
}
