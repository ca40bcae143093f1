//! Main Othello engine facade
//!
//! This module wires the searcher to a configured time budget and exposes the
//! move request API. Every request is independent: the engine keeps only its
//! configuration between calls.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use othello::{Board, Engine, EngineConfig, Stone};
//!
//! let config = EngineConfig::default().with_time_limit(Duration::from_millis(100));
//! let mut engine = Engine::with_config(config);
//!
//! let result = engine.get_move_with_stats(&Board::standard(), Stone::Black);
//! println!("Best move: {}", result.best_move);
//! println!("Depth: {}", result.depth);
//! println!("Time: {:?}", result.elapsed);
//! ```

use std::time::Duration;

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::{budget_from_secs, EngineConfig};
use crate::eval::Weights;
use crate::search::{MoveResult, Progress, SearchResult, Searcher};

/// Time-bounded Othello engine.
///
/// # Configuration
///
/// The engine can be configured with:
/// - Time limit per move
/// - Optional maximum search depth
/// - Evaluator weights
///
/// # Example
///
/// ```
/// use othello::{Board, Engine, Stone};
///
/// let mut engine = Engine::new();
/// engine.set_time_limit_secs(0.1);
///
/// if let Some(best_move) = engine.get_move(&Board::standard(), Stone::Black) {
///     println!("Play at {best_move}");
/// }
/// ```
pub struct Engine {
    searcher: Searcher,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default settings.
    ///
    /// Default configuration:
    /// - 5 second time limit
    /// - No depth cap
    /// - Default evaluator weights
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Time limit, depth cap and weights
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.weights).with_max_depth(config.max_depth),
            config,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Convenience wrapper over [`Engine::get_move_with_stats`].
    ///
    /// # Returns
    ///
    /// The best move found, or `None` when the side must pass or no depth
    /// finished in time.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move.pos()
    }

    /// Get the best move with detailed search statistics.
    ///
    /// # Arguments
    ///
    /// * `board` - Current board state
    /// * `color` - Color to move
    ///
    /// # Returns
    ///
    /// `SearchResult` with the move, score, completed depth, node count,
    /// elapsed time, termination reason and per-depth progress.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> SearchResult {
        self.get_move_with_progress(board, color, |_| {})
    }

    /// Search like [`Engine::get_move_with_stats`], reporting each completed
    /// depth to `on_progress` as it happens.
    pub fn get_move_with_progress<F>(
        &mut self,
        board: &Board,
        color: Stone,
        on_progress: F,
    ) -> SearchResult
    where
        F: FnMut(&Progress),
    {
        debug!(
            side = %color,
            budget = ?self.config.time_limit,
            empty = board.empty_count(),
            "move requested"
        );
        self.searcher
            .search_timed_with(board, color, self.config.time_limit, on_progress)
    }

    /// Set the maximum search depth. `None` searches until time or the end
    /// of the game.
    pub fn set_max_depth(&mut self, depth: Option<u32>) {
        self.config.max_depth = depth;
        self.rebuild_searcher();
    }

    /// Set the time limit for each move request.
    pub fn set_time_limit(&mut self, time_limit: Duration) {
        self.config.time_limit = time_limit;
    }

    /// Set the time limit in seconds. Negative or NaN values mean zero.
    pub fn set_time_limit_secs(&mut self, secs: f64) {
        self.config.time_limit = budget_from_secs(secs);
    }

    pub fn set_weights(&mut self, weights: Weights) {
        self.config.weights = weights;
        self.rebuild_searcher();
    }

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn rebuild_searcher(&mut self) {
        self.searcher = Searcher::new(self.config.weights).with_max_depth(self.config.max_depth);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the best move for `side` within `time_budget_secs` seconds.
///
/// Negative or NaN budgets are treated as zero.
///
/// # Example
///
/// ```
/// use othello::{find_best_move, Board, MoveResult, Stone};
///
/// let result = find_best_move(&Board::standard(), Stone::Black, 0.05);
/// assert!(matches!(result, MoveResult::Found(_) | MoveResult::NoCompletedDepth));
/// ```
#[must_use]
pub fn find_best_move(board: &Board, side: Stone, time_budget_secs: f64) -> MoveResult {
    let config = EngineConfig::default().with_time_limit_secs(time_budget_secs);
    Engine::with_config(config)
        .get_move_with_stats(board, side)
        .best_move
}
