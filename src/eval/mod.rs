//! Evaluation module for Othello positions
//!
//! Static scoring of a board snapshot from Black's point of view. The score
//! is a weighted sum of material, corners, corner adjacency, mobility,
//! frontier and square-value terms.

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_with, Breakdown};
pub use weights::{Weights, SQUARE_WEIGHTS};
