//! Search outcomes and progress records

use std::fmt;
use std::time::Duration;

use crate::board::{Pos, Stone};
use crate::error::{EngineResult, SearchError};

/// Answer to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Best move of the deepest completed iteration
    Found(Pos),
    /// The side to move has no legal move and must pass
    NoLegalMove,
    /// Not even the shallowest iteration finished within the budget
    NoCompletedDepth,
}

impl MoveResult {
    /// Integer code of [`MoveResult::NoLegalMove`]
    pub const NO_LEGAL_MOVE_CODE: i32 = -1;
    /// Integer code of [`MoveResult::NoCompletedDepth`]
    pub const NO_COMPLETED_DEPTH_CODE: i32 = -2;

    #[inline]
    pub fn pos(self) -> Option<Pos> {
        match self {
            MoveResult::Found(pos) => Some(pos),
            _ => None,
        }
    }

    /// Packed integer form: [`Pos::encode`] for a move, negative sentinels otherwise.
    pub fn encode(self) -> i32 {
        match self {
            MoveResult::Found(pos) => pos.encode() as i32,
            MoveResult::NoLegalMove => Self::NO_LEGAL_MOVE_CODE,
            MoveResult::NoCompletedDepth => Self::NO_COMPLETED_DEPTH_CODE,
        }
    }

    pub fn decode(code: i32) -> Option<Self> {
        match code {
            Self::NO_LEGAL_MOVE_CODE => Some(MoveResult::NoLegalMove),
            Self::NO_COMPLETED_DEPTH_CODE => Some(MoveResult::NoCompletedDepth),
            _ => u16::try_from(code)
                .ok()
                .and_then(Pos::decode)
                .map(MoveResult::Found),
        }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveResult::Found(pos) => write!(f, "{pos}"),
            MoveResult::NoLegalMove => f.write_str("pass"),
            MoveResult::NoCompletedDepth => f.write_str("no result"),
        }
    }
}

/// Emitted after each fully completed iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub plies: u32,
    pub best_move: Pos,
    pub score: f64,
}

/// Why iterative deepening stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The ply limit passed the number of empty cells
    TreeExhausted,
    /// The configured maximum depth was reached
    DepthLimit,
    /// The deadline passed before or during an iteration
    TimeExpired,
    /// The root had no legal move
    NoLegalMove,
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: MoveResult,
    /// Score of the chosen root child (Black-positive)
    pub score: Option<f64>,
    /// Deepest completed iteration
    pub depth: u32,
    /// Total nodes visited, including aborted iterations
    pub nodes: u64,
    pub elapsed: Duration,
    pub termination: Termination,
    /// One record per completed iteration
    pub progress: Vec<Progress>,
    /// Side the move was requested for
    pub side: Stone,
    /// Time budget, if the search was timed
    pub budget: Option<Duration>,
}

impl SearchResult {
    pub(crate) fn new(side: Stone, budget: Option<Duration>) -> Self {
        Self {
            best_move: MoveResult::NoCompletedDepth,
            score: None,
            depth: 0,
            nodes: 0,
            elapsed: Duration::ZERO,
            termination: Termination::TimeExpired,
            progress: Vec::new(),
            side,
            budget,
        }
    }

    /// The chosen move, with both sentinels turned into errors.
    pub fn into_move(self) -> EngineResult<Pos> {
        match self.best_move {
            MoveResult::Found(pos) => Ok(pos),
            MoveResult::NoLegalMove => Err(SearchError::NoLegalMove { side: self.side }),
            MoveResult::NoCompletedDepth => Err(SearchError::NoCompletedDepth {
                budget: self.budget.unwrap_or(Duration::ZERO),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_result_codes() {
        let found = MoveResult::Found(Pos::new(2, 4));
        assert_eq!(found.encode(), 2 + (4 << 6));
        assert_eq!(MoveResult::decode(found.encode()), Some(found));

        assert_eq!(MoveResult::NoLegalMove.encode(), -1);
        assert_eq!(MoveResult::decode(-1), Some(MoveResult::NoLegalMove));
        assert_eq!(MoveResult::decode(-2), Some(MoveResult::NoCompletedDepth));
        assert_eq!(MoveResult::decode(-3), None);
        assert_eq!(MoveResult::decode(8), None);
    }

    #[test]
    fn test_into_move() {
        let mut result = SearchResult::new(Stone::White, Some(Duration::from_millis(10)));
        assert_eq!(
            result.clone().into_move(),
            Err(SearchError::NoCompletedDepth {
                budget: Duration::from_millis(10)
            })
        );

        result.best_move = MoveResult::NoLegalMove;
        assert_eq!(
            result.clone().into_move(),
            Err(SearchError::NoLegalMove { side: Stone::White })
        );

        result.best_move = MoveResult::Found(Pos::new(0, 0));
        assert_eq!(result.into_move(), Ok(Pos::new(0, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(MoveResult::Found(Pos::new(2, 3)).to_string(), "d3");
        assert_eq!(MoveResult::NoLegalMove.to_string(), "pass");
    }
}
