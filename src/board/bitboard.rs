//! Bitboard occupancy set for one player

use super::{Cell, TOTAL_CELLS};

/// One bit per cell. The 16x8 torus fits a single `u128` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u128,
}

const _: () = assert!(TOTAL_CELLS <= u128::BITS as usize);

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub fn set(&mut self, cell: Cell) {
        self.bits |= 1u128 << cell.to_index();
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> bool {
        (self.bits >> cell.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set cells in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Cell::from_index(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut bb = Bitboard::new();
        let cell = Cell::new(15, 7);
        assert!(bb.is_empty());
        assert!(!bb.get(cell));
        bb.set(cell);
        assert!(bb.get(cell));
        assert!(!bb.get(Cell::new(15, 6)));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Cell::new(3, 1));
        bb.set(Cell::new(0, 7));
        bb.set(Cell::new(3, 0));
        let cells: Vec<Cell> = bb.iter_ones().collect();
        assert_eq!(cells, vec![Cell::new(0, 7), Cell::new(3, 0), Cell::new(3, 1)]);
    }

    #[test]
    fn test_last_cell_fits() {
        let mut bb = Bitboard::new();
        bb.set(Cell::new(15, 7));
        assert_eq!(bb.iter_ones().next(), Some(Cell::new(15, 7)));
    }
}
