//! Board representation for the torus board

pub mod bitboard;
pub mod board;
pub mod topology;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use topology::{cycle_length, wrap_index};

/// Cells around the major ring (u axis)
pub const U_CELLS: usize = 16;
/// Cells around the tube cross-section (v axis)
pub const V_CELLS: usize = 8;
pub const TOTAL_CELLS: usize = U_CELLS * V_CELLS; // 128

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Torus geometry, only used for presentation
pub const MAJOR_RADIUS: f64 = 20.0;
pub const MINOR_RADIUS: f64 = 10.0;

/// Cell contents. `One` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    One,
    Two,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::One => Stone::Two,
            Stone::Two => Stone::One,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Numeric player code: 0 for empty, 1 or 2 for a player
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::One => 1,
            Stone::Two => 2,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

impl serde::Serialize for Stone {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A cell on the torus. `i` runs around the major ring, `j` around the tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Cell {
    pub i: u8,
    pub j: u8,
}

impl Cell {
    #[inline]
    pub fn new(i: u8, j: u8) -> Self {
        debug_assert!((i as usize) < U_CELLS && (j as usize) < V_CELLS);
        Self { i, j }
    }

    /// Canonical cell for arbitrary signed coordinates
    #[inline]
    pub fn wrapped(i: i32, j: i32) -> Self {
        Self {
            i: wrap_index(i, U_CELLS) as u8,
            j: wrap_index(j, V_CELLS) as u8,
        }
    }

    /// Row-major index, `i` outer and `j` inner
    #[inline]
    pub fn to_index(self) -> usize {
        self.i as usize * V_CELLS + self.j as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            i: (idx / V_CELLS) as u8,
            j: (idx % V_CELLS) as u8,
        }
    }

    /// Whether signed coordinates name a cell without wrapping
    #[inline]
    pub fn is_valid(i: i32, j: i32) -> bool {
        i >= 0 && i < U_CELLS as i32 && j >= 0 && j < V_CELLS as i32
    }

    /// Cell reached after `steps` applications of `(di, dj)`
    #[inline]
    pub fn step(self, di: i32, dj: i32, steps: i32) -> Self {
        Self::wrapped(self.i as i32 + di * steps, self.j as i32 + dj * steps)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// A stone at a cell: the last move played, or one entry of the occupied list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Move {
    pub i: u8,
    pub j: u8,
    pub player: Stone,
}

impl Move {
    #[inline]
    pub fn new(cell: Cell, player: Stone) -> Self {
        Self {
            i: cell.i,
            j: cell.j,
            player,
        }
    }

    #[inline]
    pub fn cell(self) -> Cell {
        Cell::new(self.i, self.j)
    }
}
