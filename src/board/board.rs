//! Board structure: two disjoint occupancy masks

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board.
///
/// Holds only cell occupancy; side to move and move counters belong to the
/// caller. The board is `Copy`, so every copy is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Standard opening position: d4/e5 White, e4/d5 Black.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.set(Pos::new(3, 3), Stone::White);
        board.set(Pos::new(3, 4), Stone::Black);
        board.set(Pos::new(4, 3), Stone::Black);
        board.set(Pos::new(4, 4), Stone::White);
        board
    }

    /// Build a board from a row-major 8x8 grid.
    pub fn from_cells(cells: [[Stone; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in cells.iter().enumerate() {
            for (c, &stone) in row.iter().enumerate() {
                board.set(Pos::new(r as u8, c as u8), stone);
            }
        }
        board
    }

    /// Row-major 8x8 grid view of the board.
    pub fn cells(&self) -> [[Stone; BOARD_SIZE]; BOARD_SIZE] {
        let mut cells = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.get(Pos::new(r as u8, c as u8));
            }
        }
        cells
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Overwrite a cell. Setting `Stone::Empty` clears it.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Stone::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Stone::Empty => {
                self.black.clear(pos);
                self.white.clear(pos);
            }
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Number of cells holding `stone` (empty cells for `Stone::Empty`).
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => self.empty_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.stone_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Iterate over every board position in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }

    /// Same board with Black and White exchanged on every cell.
    pub fn swapped(&self) -> Self {
        Self {
            black: self.white,
            white: self.black,
        }
    }
}
