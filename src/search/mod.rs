//! Search module for the Othello engine
//!
//! Contains:
//! - Search tree nodes owning their board snapshot
//! - Alpha-Beta search with iterative deepening under a time budget
//! - Move results, progress records and search statistics

pub mod alphabeta;
pub mod node;
pub mod result;

pub use alphabeta::{Searcher, INF};
pub use node::SearchNode;
pub use result::{MoveResult, Progress, SearchResult, Termination};
