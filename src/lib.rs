//! Othello engine with time-bounded alpha-beta search
//!
//! Given a board, the side to move and a wall-clock budget, the engine
//! returns the best move it can find:
//! - Standard 8x8 board, Black moves first
//! - A move must flip at least one opposing disk
//! - Iterative deepening keeps the result of the deepest completed depth
//! - Six-term static evaluation scored from Black's point of view
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move engine (captures, legal moves, game end)
//! - [`eval`]: Position evaluation
//! - [`search`]: Alpha-beta search with iterative deepening
//! - [`engine`]: Configured engine and the one-shot [`find_best_move`]
//! - [`display`]: Terminal rendering and board parsing
//! - [`game`]: Match runner and players
//!
//! # Quick Start
//!
//! ```
//! use othello::{find_best_move, Board, MoveResult, Stone};
//! use othello::rules::apply_move;
//!
//! let mut board = Board::standard();
//!
//! if let MoveResult::Found(pos) = find_best_move(&board, Stone::Black, 0.1) {
//!     apply_move(&mut board, pos, Stone::Black);
//!     println!("Black plays {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{DisplayConfig, EngineConfig};
pub use engine::{find_best_move, Engine};
pub use error::{EngineResult, GameError, ParseError, SearchError};
pub use search::{MoveResult, Progress, SearchResult, Termination};
