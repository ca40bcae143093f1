//! Game rules for Othello
//!
//! This module implements the move engine:
//! - Capture detection and disk flipping
//! - Legal move enumeration
//! - End-of-game detection

pub mod capture;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{apply_move, flipped_positions, would_capture};
pub use moves::{has_legal_move, is_legal_move, legal_move_count, legal_moves};
pub use outcome::{is_game_over, outcome, DiskCount, GameOutcome};
