//! Board representation for Othello

pub mod bitboard;
pub mod board;


use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Cell states. `Black` and `White` double as the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Sign of this stone in Black-positive scores
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Stone::Black => 1.0,
            Stone::White => -1.0,
            Stone::Empty => 0.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stone {
    type Err = ParseError;

    /// Parses a side name (`black`/`b`, `white`/`w`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Stone::Black),
            "white" | "w" => Ok(Stone::White),
            _ => Err(ParseError::UnknownSide(s.to_string())),
        }
    }
}

/// The 8 scan directions, in the fixed order N, NE, E, SE, S, SW, W, NW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit step as (row delta, col delta)
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbouring position one step in `dir`, or `None` off the board.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
    }

    /// Packed move code: row in the low 6 bits, column in the next 6.
    #[inline]
    pub fn encode(self) -> u16 {
        self.row as u16 | (self.col as u16) << 6
    }

    /// Inverse of [`Pos::encode`]. Returns `None` for codes outside the board.
    pub fn decode(code: u16) -> Option<Pos> {
        let row = (code & 63) as i32;
        let col = ((code >> 6) & 63) as i32;
        (code >> 12 == 0 && Pos::is_valid(row, col)).then(|| Pos::new(row as u8, col as u8))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Algebraic notation: column letter then 1-based row, e.g. `(2, 3)` is `d3`.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(ParseError::InvalidCoordinate(s.to_string()));
        };
        let col = file.to_ascii_lowercase().wrapping_sub(b'a');
        let row = rank.wrapping_sub(b'1');
        if (col as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE {
            Ok(Pos::new(row, col))
        } else {
            Err(ParseError::InvalidCoordinate(s.to_string()))
        }
    }
}
