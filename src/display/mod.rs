//! Terminal display for Othello boards
//!
//! Plain-text rendering that also serves as the board file format, with an
//! optional ANSI-coloured variant for interactive terminals.

mod terminal;
mod theme;

pub use terminal::{parse_board, render, render_with_last_move};
