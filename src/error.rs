//! Error types for the Othello engine
//!
//! The search core has a single internal failure (the deadline passing), which
//! the iterative-deepening driver recovers from. The remaining variants cover
//! caller-side validation and the match runner.

use std::time::Duration;

use thiserror::Error;

use crate::board::{Pos, Stone};

/// Errors raised by the search controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Deadline reached mid-iteration; the iteration's partial results are void
    #[error("search deadline of {budget:?} exceeded")]
    TimeExceeded { budget: Duration },

    /// Not even the depth-1 iteration completed within the budget
    #[error("no search depth completed within {budget:?}")]
    NoCompletedDepth { budget: Duration },

    /// The side to move has no legal move at the root
    #[error("{side} has no legal move")]
    NoLegalMove { side: Stone },
}

/// Errors from parsing caller-supplied text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid coordinate '{0}' (expected a1..h8)")]
    InvalidCoordinate(String),

    #[error("unknown side '{0}' (expected black or white)")]
    UnknownSide(String),

    #[error("invalid board cell '{ch}' at line {line}")]
    InvalidCell { ch: char, line: usize },

    #[error("board must have 8 rows of 8 cells, found {rows} rows")]
    WrongRowCount { rows: usize },

    #[error("board row {row} has {cells} cells, expected 8")]
    WrongRowLength { row: usize, cells: usize },
}

/// Rule violations detected by the match runner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{side} played illegal move {pos}")]
    IllegalMove { side: Stone, pos: Pos },

    #[error("{side} passed while holding a legal move")]
    IllegalPass { side: Stone },

    #[error("{side} took {elapsed:?}, over the {limit:?} move limit")]
    MoveTimeout {
        side: Stone,
        elapsed: Duration,
        limit: Duration,
    },
}

/// Result type alias for search operations
pub type EngineResult<T> = Result<T, SearchError>;
