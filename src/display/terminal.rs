//! Text rendering and parsing of boards

use std::fmt::Write;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::config::DisplayConfig;
use crate::error::ParseError;

use super::theme;

const COLUMN_LABELS: &str = "abcdefgh";

/// Render the board as text.
///
/// Columns are labelled `a`..`h` and rows `1`..`8`. Without colours each cell
/// is ` B `, ` W ` or ` . `; the output parses back with [`parse_board`].
#[must_use]
pub fn render(board: &Board, config: &DisplayConfig) -> String {
    render_with_last_move(board, config, None)
}

/// Render the board, marking `last_move`.
///
/// The marked cell is bracketed (`[B]`) in plain mode and drawn on a
/// highlighted background with colours on.
#[must_use]
pub fn render_with_last_move(board: &Board, config: &DisplayConfig, last_move: Option<Pos>) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 3 + 8) + 32);

    out.push_str("  ");
    for label in COLUMN_LABELS.chars() {
        let _ = write!(out, " {label} ");
    }
    out.push('\n');

    for row in 0..BOARD_SIZE as u8 {
        let _ = write!(out, "{} ", row + 1);
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            let marked = last_move == Some(pos);
            push_cell(&mut out, board.get(pos), marked, config);
        }
        out.push('\n');
    }

    out
}

fn push_cell(out: &mut String, stone: Stone, marked: bool, config: &DisplayConfig) {
    if config.ansi_colors {
        let bg = if marked { theme::LAST_MOVE_BG } else { theme::FELT_BG };
        match stone {
            Stone::Black => {
                let _ = write!(out, "{}{} {} {}", theme::BLACK_DISK, bg, theme::DISK_GLYPH, theme::RESET);
            }
            Stone::White => {
                let _ = write!(out, "{}{} {} {}", theme::WHITE_DISK, bg, theme::DISK_GLYPH, theme::RESET);
            }
            Stone::Empty => {
                let _ = write!(out, "{} {} {}", bg, theme::EMPTY_GLYPH, theme::RESET);
            }
        }
    } else {
        let glyph = match stone {
            Stone::Black => 'B',
            Stone::White => 'W',
            Stone::Empty => theme::EMPTY_GLYPH,
        };
        if marked {
            let _ = write!(out, "[{glyph}]");
        } else {
            let _ = write!(out, " {glyph} ");
        }
    }
}

/// Parse a board from its textual form.
///
/// Accepts `B`/`X` for Black, `W`/`O` for White and `.`/`-` for empty cells.
/// Whitespace, row numbers, column letters and `[` `]` markers are ignored;
/// lines holding no cells are skipped.
///
/// # Errors
///
/// Returns a [`ParseError`] on any other character or when the grid is not
/// 8 rows of 8 cells.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut rows: Vec<Vec<Stone>> = Vec::with_capacity(BOARD_SIZE);

    for (line_no, line) in text.lines().enumerate() {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for ch in line.chars() {
            match ch {
                'B' | 'X' => cells.push(Stone::Black),
                'W' | 'O' => cells.push(Stone::White),
                '.' | '-' => cells.push(Stone::Empty),
                c if c.is_whitespace() || c.is_ascii_digit() => {}
                '[' | ']' | '|' => {}
                c if COLUMN_LABELS.contains(c) => {}
                c => return Err(ParseError::InvalidCell { ch: c, line: line_no + 1 }),
            }
        }
        if cells.is_empty() {
            continue;
        }
        if cells.len() != BOARD_SIZE {
            return Err(ParseError::WrongRowLength {
                row: rows.len() + 1,
                cells: cells.len(),
            });
        }
        rows.push(cells);
    }

    if rows.len() != BOARD_SIZE {
        return Err(ParseError::WrongRowCount { rows: rows.len() });
    }

    let mut board = Board::new();
    for (row, cells) in rows.iter().enumerate() {
        for (col, &stone) in cells.iter().enumerate() {
            board.set(Pos::new(row as u8, col as u8), stone);
        }
    }
    Ok(board)
}
