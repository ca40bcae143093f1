//! Alpha-Beta search with iterative deepening
//!
//! This module implements the core search algorithm for the Othello engine:
//! depth-limited minimax with alpha-beta pruning, driven by an outer
//! iterative-deepening loop that stops when the tree is exhausted or the time
//! budget runs out.
//!
//! # Features
//!
//! - Iterative deepening: the reported move always comes from the deepest
//!   iteration that ran to completion
//! - Deadline checked on entry to every node; an expired deadline unwinds the
//!   whole iteration through `?`
//! - Root children kept in generation order so ties resolve to the last move
//!
//! Backing up follows the node's last mover rather than its side to move: a
//! node reached by a Black move folds child scores into `alpha` with `max`,
//! any other node folds them into `beta` with `min`. The `(alpha, beta)` pair
//! a child receives carries the bounds left by its earlier siblings.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Stone};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::default();
//! let result = searcher.search_to_depth(&Board::standard(), Stone::Black, 3);
//! if let Some(best_move) = result.best_move.pos() {
//!     println!("Best move: {best_move}");
//! }
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::error::{EngineResult, SearchError};
use crate::eval::{evaluate_with, Weights};
use crate::rules::{has_legal_move, legal_moves};

use super::node::SearchNode;
use super::result::{MoveResult, Progress, SearchResult, Termination};

/// Infinity score for alpha-beta bounds
pub const INF: f64 = 99_999_999_999_999.0;

/// Alpha-Beta searcher.
///
/// Holds only configuration and per-request counters; nothing carries over
/// from one request to the next.
pub struct Searcher {
    weights: Weights,
    max_depth: Option<u32>,
    nodes: u64,
    start_time: Option<Instant>,
    time_limit: Option<Duration>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Weights::DEFAULT)
    }
}

impl Searcher {
    /// Create a searcher evaluating leaves with `weights`.
    #[must_use]
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            max_depth: None,
            nodes: 0,
            start_time: None,
            time_limit: None,
        }
    }

    /// Cap iterative deepening at `max_depth` plies.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Search within a wall-clock budget.
    #[must_use]
    pub fn search_timed(&mut self, board: &Board, color: Stone, budget: Duration) -> SearchResult {
        self.search_timed_with(board, color, budget, |_| {})
    }

    /// Timed search reporting each completed iteration to `on_progress`.
    pub fn search_timed_with<F>(
        &mut self,
        board: &Board,
        color: Stone,
        budget: Duration,
        mut on_progress: F,
    ) -> SearchResult
    where
        F: FnMut(&Progress),
    {
        self.start_time = Some(Instant::now());
        self.time_limit = Some(budget);
        let result = self.search_iterative(board, color, self.max_depth, &mut on_progress);
        self.start_time = None;
        self.time_limit = None;
        result
    }

    /// Untimed iterative deepening up to `plies` (or the end of the game).
    ///
    /// Deterministic: used by tests and analysis.
    #[must_use]
    pub fn search_to_depth(&mut self, board: &Board, color: Stone, plies: u32) -> SearchResult {
        self.start_time = None;
        self.time_limit = None;
        let limit = Some(self.max_depth.map_or(plies, |d| d.min(plies)));
        self.search_iterative(board, color, limit, &mut |_: &Progress| {})
    }

    /// Fail once the deadline has passed.
    #[inline]
    fn check_time(&self) -> EngineResult<()> {
        if let (Some(start), Some(limit)) = (self.start_time, self.time_limit) {
            if start.elapsed() >= limit {
                return Err(SearchError::TimeExceeded { budget: limit });
            }
        }
        Ok(())
    }

    /// Iterative deepening driver.
    fn search_iterative(
        &mut self,
        board: &Board,
        color: Stone,
        max_depth: Option<u32>,
        on_progress: &mut dyn FnMut(&Progress),
    ) -> SearchResult {
        let start = self.start_time.unwrap_or_else(Instant::now);
        let mut result = SearchResult::new(color, self.time_limit);
        self.nodes = 0;

        if !has_legal_move(board, color) {
            debug!(side = %color, "no legal move at root");
            result.best_move = MoveResult::NoLegalMove;
            result.termination = Termination::NoLegalMove;
            result.elapsed = start.elapsed();
            return result;
        }

        let tree_depth = board.empty_count();
        let limit = max_depth.map_or(tree_depth, |d| d.min(tree_depth));
        let mut plies = 0;

        loop {
            plies += 1;

            if plies > limit {
                result.termination = if plies > tree_depth {
                    Termination::TreeExhausted
                } else {
                    Termination::DepthLimit
                };
                break;
            }

            if self.check_time().is_err() {
                result.termination = Termination::TimeExpired;
                break;
            }

            let children = match self.search_root(board, color, plies) {
                Ok(children) => children,
                Err(err) => {
                    debug!(plies, %err, "iteration aborted, keeping previous depth");
                    result.termination = Termination::TimeExpired;
                    break;
                }
            };

            let Some((best_move, score)) = select_best(&children, color) else {
                result.best_move = MoveResult::NoLegalMove;
                result.termination = Termination::NoLegalMove;
                break;
            };

            let progress = Progress {
                plies,
                best_move,
                score,
            };
            info!("Searched {} plies and got {} ({})", plies, best_move, score);
            on_progress(&progress);

            result.best_move = MoveResult::Found(best_move);
            result.score = Some(score);
            result.depth = plies;
            result.progress.push(progress);
        }

        result.nodes = self.nodes;
        result.elapsed = start.elapsed();
        debug!(
            nodes = result.nodes,
            depth = result.depth,
            termination = ?result.termination,
            "search finished"
        );
        result
    }

    /// Run one iteration and return the surviving root children in order.
    ///
    /// On timeout the partially built children are dropped with the error.
    fn search_root(&mut self, board: &Board, color: Stone, plies: u32) -> EngineResult<Vec<SearchNode>> {
        let mut root = SearchNode::root(*board, color);
        let mut children = Vec::new();
        self.search(&mut root, -INF, INF, plies, Some(&mut children))?;
        Ok(children)
    }

    /// Depth-limited alpha-beta over `node`, storing its score in place.
    ///
    /// `retained` is only given at the root; it receives every child that was
    /// not cut off.
    fn search(
        &mut self,
        node: &mut SearchNode,
        mut alpha: f64,
        mut beta: f64,
        plies: u32,
        mut retained: Option<&mut Vec<SearchNode>>,
    ) -> EngineResult<()> {
        self.check_time()?;
        self.nodes += 1;

        let mover = node.side_to_move();
        let moves = legal_moves(&node.board, mover);

        if node.depth == plies || moves.is_empty() {
            node.score = evaluate_with(&node.board, &self.weights);
            return Ok(());
        }

        for mv in moves {
            let mut child = node.child(mv, mover);
            self.search(&mut child, alpha, beta, plies, None)?;

            if node.player == Stone::Black {
                alpha = alpha.max(child.score);
                node.score = alpha;
            } else {
                beta = beta.min(child.score);
                node.score = beta;
            }

            if alpha >= beta {
                break;
            }

            if let Some(kept) = retained.as_mut() {
                kept.push(child);
            }
        }

        Ok(())
    }
}

/// Best root child for `color`.
///
/// Comparison is non-strict, so among equal scores the last child in
/// generation order wins.
fn select_best(children: &[SearchNode], color: Stone) -> Option<(Pos, f64)> {
    let mut best: Option<(Pos, f64)> = None;

    for child in children {
        let Some(mv) = child.last_move else { continue };
        let replace = match best {
            None => true,
            Some((_, best_score)) if color == Stone::Black => child.score >= best_score,
            Some((_, best_score)) => child.score <= best_score,
        };
        if replace {
            best = Some((mv, child.score));
        }
    }

    best
}
