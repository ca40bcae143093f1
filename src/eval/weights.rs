//! Heuristic weights and static board tables

use crate::board::{Pos, BOARD_SIZE};

/// Linear weights applied to the six heuristic terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Disk majority
    pub material: f64,
    /// Corner ownership
    pub corners: f64,
    /// Disks next to open corners
    pub corner_adjacency: f64,
    /// Legal move majority
    pub mobility: f64,
    /// Frontier exposure
    pub frontier: f64,
    /// Static square values
    pub squares: f64,
}

impl Weights {
    pub const DEFAULT: Weights = Weights {
        material: 10.0,
        corners: 801.724,
        corner_adjacency: 382.026,
        mobility: 78.922,
        frontier: 74.396,
        squares: 10.0,
    };

    /// Weights in term order P, C, L, M, F, D
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.material,
            self.corners,
            self.corner_adjacency,
            self.mobility,
            self.frontier,
            self.squares,
        ]
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-square values. Corners are prized, X-squares are the worst cells.
pub const SQUARE_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [20, -3, 11, 8, 8, 11, -3, 20],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [20, -3, 11, 8, 8, 11, -3, 20],
];

/// The four corners, each with its three neighbouring cells
pub const CORNERS: [(Pos, [Pos; 3]); 4] = [
    (
        Pos { row: 0, col: 0 },
        [Pos { row: 0, col: 1 }, Pos { row: 1, col: 1 }, Pos { row: 1, col: 0 }],
    ),
    (
        Pos { row: 0, col: 7 },
        [Pos { row: 0, col: 6 }, Pos { row: 1, col: 6 }, Pos { row: 1, col: 7 }],
    ),
    (
        Pos { row: 7, col: 0 },
        [Pos { row: 6, col: 0 }, Pos { row: 6, col: 1 }, Pos { row: 7, col: 1 }],
    ),
    (
        Pos { row: 7, col: 7 },
        [Pos { row: 7, col: 6 }, Pos { row: 6, col: 6 }, Pos { row: 6, col: 7 }],
    ),
];

/// Points per corner in the corner term
pub const CORNER_VALUE: f64 = 25.0;

/// Penalty per disk next to an empty corner
pub const CORNER_ADJACENT_VALUE: f64 = 12.5;
