//! Heuristic evaluation function for Othello positions
//!
//! This module provides the static evaluation used at search leaves.
//! It combines six terms, each scored from Black's point of view:
//! - Material: disk majority
//! - Corners: corner ownership
//! - Corner adjacency: disks next to a still-empty corner (a liability)
//! - Mobility: legal move majority
//! - Frontier: disks bordering empty cells (a liability)
//! - Squares: static per-cell values
//!
//! All but the square term lie in [-100, 100]. Swapping the colours of every
//! disk negates every term, and therefore the total.

use crate::board::{Board, Direction, Pos, Stone};
use crate::rules::legal_move_count;

use super::weights::{
    Weights, CORNERS, CORNER_ADJACENT_VALUE, CORNER_VALUE, SQUARE_WEIGHTS,
};

/// Individual heuristic terms before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Breakdown {
    pub material: f64,
    pub corners: f64,
    pub corner_adjacency: f64,
    pub mobility: f64,
    pub frontier: f64,
    pub squares: f64,
}

impl Breakdown {
    /// Compute all six terms for `board`.
    pub fn of(board: &Board) -> Self {
        Self {
            material: material(board),
            corners: corners(board),
            corner_adjacency: corner_adjacency(board),
            mobility: mobility(board),
            frontier: frontier(board),
            squares: squares(board),
        }
    }

    /// Terms in order P, C, L, M, F, D
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

    /// Weighted sum of the terms.
    pub fn score(&self, weights: &Weights) -> f64 {
        let weights = weights.as_array();
        let terms = self.as_array();

        let mut score = 0.0;
        for i in 0..terms.len() {
            score += weights[i] * terms[i];
        }
        score
    }
}

/// Evaluate the board with the default weights.
///
/// Positive values favour Black, negative values favour White.
#[must_use]
pub fn evaluate(board: &Board) -> f64 {
    evaluate_with(board, &Weights::DEFAULT)
}

/// Evaluate the board with explicit weights.
#[must_use]
pub fn evaluate_with(board: &Board, weights: &Weights) -> f64 {
    Breakdown::of(board).score(weights)
}

/// Majority ratio signed toward the larger count; 0 on a tie.
///
/// A side with a positive count against zero gets the full 100.
#[inline]
fn majority(black: u32, white: u32) -> f64 {
    let total = (black + white) as f64;
    if black > white {
        100.0 * black as f64 / total
    } else if black < white {
        -100.0 * white as f64 / total
    } else {
        0.0
    }
}

/// Disk majority term
fn material(board: &Board) -> f64 {
    majority(board.count(Stone::Black), board.count(Stone::White))
}

/// Corner ownership term
fn corners(board: &Board) -> f64 {
    let (mut black, mut white) = (0, 0);
    for (corner, _) in &CORNERS {
        match board.get(*corner) {
            Stone::Black => black += 1,
            Stone::White => white += 1,
            Stone::Empty => {}
        }
    }
    CORNER_VALUE * black as f64 - CORNER_VALUE * white as f64
}

/// Disks sitting next to an empty corner
fn corner_adjacency(board: &Board) -> f64 {
    let (mut black, mut white) = (0, 0);
    for (corner, adjacent) in &CORNERS {
        if !board.is_empty(*corner) {
            continue;
        }
        for &pos in adjacent {
            match board.get(pos) {
                Stone::Black => black += 1,
                Stone::White => white += 1,
                Stone::Empty => {}
            }
        }
    }
    -CORNER_ADJACENT_VALUE * black as f64 + CORNER_ADJACENT_VALUE * white as f64
}

/// Legal move majority term
fn mobility(board: &Board) -> f64 {
    majority(
        legal_move_count(board, Stone::Black),
        legal_move_count(board, Stone::White),
    )
}

/// Frontier term: the side with fewer empty-neighbour exposures scores.
fn frontier(board: &Board) -> f64 {
    let (mut black, mut white) = (0u32, 0u32);

    for pos in Board::positions() {
        let stone = board.get(pos);
        if stone == Stone::Empty {
            continue;
        }
        let exposed = empty_neighbours(board, pos);
        match stone {
            Stone::Black => black += exposed,
            Stone::White => white += exposed,
            Stone::Empty => {}
        }
    }

    -majority(black, white)
}

/// Number of in-board empty cells among the 8 neighbours of `pos`
#[inline]
fn empty_neighbours(board: &Board, pos: Pos) -> u32 {
    Direction::ALL
        .iter()
        .filter_map(|&dir| pos.step(dir))
        .filter(|&p| board.is_empty(p))
        .count() as u32
}

/// Static square values, signed by occupant
fn squares(board: &Board) -> f64 {
    let mut total = 0.0;
    for pos in Board::positions() {
        let value = SQUARE_WEIGHTS[pos.row as usize][pos.col as usize] as f64;
        total += value * board.get(pos).sign();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    #[test]
    fn test_opening_is_balanced() {
        let board = Board::standard();
        let terms = Breakdown::of(&board);

        assert_eq!(terms.material, 0.0);
        assert_eq!(terms.corners, 0.0);
        assert_eq!(terms.corner_adjacency, 0.0);
        assert_eq!(terms.mobility, 0.0);
        assert_eq!(terms.frontier, 0.0);
        assert_eq!(terms.squares, 0.0);
        assert_eq!(evaluate(&board), 0.0);
    }

    #[test]
    fn test_majority_edge_cases() {
        assert_eq!(majority(0, 0), 0.0);
        assert_eq!(majority(3, 3), 0.0);
        assert_eq!(majority(5, 0), 100.0);
        assert_eq!(majority(0, 5), -100.0);
        assert_eq!(majority(3, 1), 75.0);
        assert_eq!(majority(1, 3), -75.0);
    }

    #[test]
    fn test_after_first_move() {
        let mut board = Board::standard();
        apply_move(&mut board, Pos::new(2, 3), Stone::Black);
        let terms = Breakdown::of(&board);

        // Black 4, White 1
        assert_eq!(terms.material, 80.0);
        assert_eq!(terms.corners, 0.0);
        assert_eq!(terms.corner_adjacency, 0.0);
        // White answers with 3 moves, Black has 3 as well
        assert_eq!(
            legal_move_count(&board, Stone::White),
            legal_move_count(&board, Stone::Black)
        );
        assert_eq!(terms.mobility, 0.0);
        // Black has more frontier exposure
        assert!(terms.frontier < 0.0);
    }

    #[test]
    fn test_corner_terms() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Stone::Black);
        board.set(Pos::new(7, 7), Stone::Black);
        board.set(Pos::new(0, 7), Stone::White);
        // Next to the empty (7,0) corner
        board.set(Pos::new(6, 1), Stone::Black);
        board.set(Pos::new(7, 1), Stone::White);
        board.set(Pos::new(6, 0), Stone::White);
        // Next to an occupied corner: not counted
        board.set(Pos::new(1, 1), Stone::Black);

        let terms = Breakdown::of(&board);
        assert_eq!(terms.corners, 25.0);
        assert_eq!(terms.corner_adjacency, -12.5 + 25.0);
    }

    #[test]
    fn test_frontier_counts_in_board_neighbours_only() {
        let mut board = Board::new();
        // Corner disk has 3 neighbours, edge disk 5
        board.set(Pos::new(0, 0), Stone::Black);
        board.set(Pos::new(0, 4), Stone::White);

        assert_eq!(empty_neighbours(&board, Pos::new(0, 0)), 3);
        assert_eq!(empty_neighbours(&board, Pos::new(0, 4)), 5);
        // Black 3, White 5: White is more exposed
        assert_eq!(Breakdown::of(&board).frontier, 100.0 * 5.0 / 8.0);
    }

    #[test]
    fn test_squares_term() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Stone::Black);
        board.set(Pos::new(1, 1), Stone::White);
        assert_eq!(Breakdown::of(&board).squares, 20.0 + 7.0);
    }

    #[test]
    fn test_weighted_sum() {
        let terms = Breakdown {
            material: 1.0,
            corners: 1.0,
            corner_adjacency: 1.0,
            mobility: 1.0,
            frontier: 1.0,
            squares: 1.0,
        };
        let expected = 10.0 + 801.724 + 382.026 + 78.922 + 74.396 + 10.0;
        assert!((terms.score(&Weights::DEFAULT) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_colour_swap_negates() {
        let mut board = Board::standard();
        apply_move(&mut board, Pos::new(2, 3), Stone::Black);
        apply_move(&mut board, Pos::new(2, 2), Stone::White);
        apply_move(&mut board, Pos::new(3, 2), Stone::Black);

        assert_eq!(evaluate(&board), -evaluate(&board.swapped()));
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::standard();
        apply_move(&mut board, Pos::new(5, 4), Stone::Black);
        assert_eq!(evaluate(&board).to_bits(), evaluate(&board).to_bits());
    }
}
