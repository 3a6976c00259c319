//! Board structure

use super::bitboard::Bitboard;
use super::{Cell, Move, Stone, U_CELLS, V_CELLS};

/// Torus board: one bitboard per player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Player one stones
    pub one: Bitboard,
    /// Player two stones
    pub two: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            one: Bitboard::new(),
            two: Bitboard::new(),
        }
    }

    /// Cells around the major ring
    #[inline]
    pub fn u_size(&self) -> usize {
        U_CELLS
    }

    /// Cells around the tube
    #[inline]
    pub fn v_size(&self) -> usize {
        V_CELLS
    }

    /// Get stone at cell
    #[inline]
    pub fn get(&self, cell: Cell) -> Stone {
        if self.one.get(cell) {
            Stone::One
        } else if self.two.get(cell) {
            Stone::Two
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        !self.one.get(cell) && !self.two.get(cell)
    }

    /// Place a stone without any rule checks
    #[inline]
    pub fn place_stone(&mut self, cell: Cell, stone: Stone) {
        match stone {
            Stone::One => self.one.set(cell),
            Stone::Two => self.two.set(cell),
            Stone::Empty => {}
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::One => Some(&self.one),
            Stone::Two => Some(&self.two),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.one.count() + self.two.count()
    }

    /// Every stone on the board, `i` outer and `j` inner
    pub fn occupied(&self) -> Vec<Move> {
        let mut stones: Vec<Move> = [Stone::One, Stone::Two]
            .into_iter()
            .filter_map(|stone| self.stones(stone).map(|bb| (stone, bb)))
            .flat_map(|(stone, bb)| bb.iter_ones().map(move |cell| Move::new(cell, stone)))
            .collect();
        stones.sort_by_key(|mv| mv.cell());
        stones
    }
}
