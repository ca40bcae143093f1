//! Capture rules: bracketing runs of opponent disks
//!
//! Placing a disk captures along a direction when the adjacent cell holds an
//! opponent disk, the opponent run continues contiguously, and the run ends
//! (inside the board) on a disk of the mover. Every captured run is flipped.

use crate::board::{Board, Direction, Pos, Stone};

/// Length of the opponent run that `stone` at `pos` would capture in `dir`.
///
/// Returns 0 when the direction does not capture: the adjacent cell is not
/// an opponent disk, or the run reaches an empty cell or the board edge.
#[inline]
fn run_length(board: &Board, pos: Pos, stone: Stone, dir: Direction) -> u32 {
    let opponent = stone.opponent();
    let mut len = 0;
    let mut cur = pos.step(dir);

    while let Some(p) = cur {
        match board.get(p) {
            s if s == opponent => {
                len += 1;
                cur = p.step(dir);
            }
            s if s == stone => return len,
            _ => return 0,
        }
    }

    0
}

/// Check whether placing `stone` at `pos` captures at least one line.
///
/// Only meaningful for an empty `pos`; callers filter on emptiness first.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Candidate cell
/// * `stone` - Side placing the disk
#[inline]
pub fn would_capture(board: &Board, pos: Pos, stone: Stone) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| run_length(board, pos, stone, dir) > 0)
}

/// Positions that would be flipped if `stone` were placed at `pos`.
///
/// Ordered by direction (N, NE, E, ... NW), then outward from `pos`.
pub fn flipped_positions(board: &Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let mut flipped = Vec::new();

    for &dir in &Direction::ALL {
        let len = run_length(board, pos, stone, dir);
        let mut cur = pos;
        for _ in 0..len {
            // The run lies inside the board, so each step exists
            let Some(next) = cur.step(dir) else { break };
            flipped.push(next);
            cur = next;
        }
    }

    flipped
}

/// Place `stone` at `pos` and flip every captured run.
///
/// No legality check is made: the caller must already know the move
/// captures. Returns the number of disks flipped.
///
/// # Arguments
/// * `board` - Mutable board to modify
/// * `pos` - Cell receiving the disk
/// * `stone` - Side making the move
pub fn apply_move(board: &mut Board, pos: Pos, stone: Stone) -> u32 {
    // Runs are measured before the placed disk can act as an anchor
    let flipped = flipped_positions(board, pos, stone);

    board.set(pos, stone);
    for &p in &flipped {
        board.set(p, stone);
    }

    flipped.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_horizontal() {
        let mut board = Board::new();
        // B W W _ : Black at (3,3) captures (3,1)-(3,2) anchored at (3,0)
        board.set(Pos::new(3, 0), Stone::Black);
        board.set(Pos::new(3, 1), Stone::White);
        board.set(Pos::new(3, 2), Stone::White);

        assert!(would_capture(&board, Pos::new(3, 3), Stone::Black));
        let flipped = flipped_positions(&board, Pos::new(3, 3), Stone::Black);
        assert_eq!(flipped, vec![Pos::new(3, 2), Pos::new(3, 1)]);
    }

    #[test]
    fn test_capture_diagonal() {
        let mut board = Board::new();
        board.set(Pos::new(2, 2), Stone::Black);
        board.set(Pos::new(3, 3), Stone::Black);
        board.set(Pos::new(4, 4), Stone::White);

        let flipped = flipped_positions(&board, Pos::new(1, 1), Stone::White);
        assert_eq!(flipped, vec![Pos::new(2, 2), Pos::new(3, 3)]);
        // From (5,5) the adjacent disk is White's own, so nothing is bracketed
        assert!(!would_capture(&board, Pos::new(5, 5), Stone::White));
    }

    #[test]
    fn test_no_capture_without_anchor() {
        let mut board = Board::new();
        // Run of White ending at the board edge
        board.set(Pos::new(0, 1), Stone::White);
        board.set(Pos::new(0, 2), Stone::White);

        assert!(!would_capture(&board, Pos::new(0, 3), Stone::Black));
        assert!(flipped_positions(&board, Pos::new(0, 3), Stone::Black).is_empty());
    }

    #[test]
    fn test_no_capture_across_gap() {
        let mut board = Board::new();
        board.set(Pos::new(4, 1), Stone::Black);
        board.set(Pos::new(4, 3), Stone::White);

        // (4,2) empty breaks the line
        assert!(!would_capture(&board, Pos::new(4, 4), Stone::Black));
    }

    #[test]
    fn test_adjacent_own_disk_is_not_capture() {
        let mut board = Board::new();
        board.set(Pos::new(4, 3), Stone::Black);
        board.set(Pos::new(4, 2), Stone::White);

        assert!(!would_capture(&board, Pos::new(4, 4), Stone::Black));
    }

    #[test]
    fn test_apply_move_flips_multiple_directions() {
        let mut board = Board::new();
        // Black to play (3,3), capturing east and south
        board.set(Pos::new(3, 4), Stone::White);
        board.set(Pos::new(3, 5), Stone::Black);
        board.set(Pos::new(4, 3), Stone::White);
        board.set(Pos::new(5, 3), Stone::White);
        board.set(Pos::new(6, 3), Stone::Black);
        // A White disk off any captured line stays put
        board.set(Pos::new(4, 4), Stone::White);

        let flipped = apply_move(&mut board, Pos::new(3, 3), Stone::Black);
        assert_eq!(flipped, 3);
        assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
        assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
        assert_eq!(board.get(Pos::new(4, 3)), Stone::Black);
        assert_eq!(board.get(Pos::new(5, 3)), Stone::Black);
        assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
        assert_eq!(board.count(Stone::Black), 6);
        assert_eq!(board.count(Stone::White), 1);
    }

    #[test]
    fn test_apply_move_opening() {
        let mut board = Board::standard();
        let flipped = apply_move(&mut board, Pos::new(2, 3), Stone::Black);

        assert_eq!(flipped, 1);
        assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
        assert_eq!(board.count(Stone::Black), 4);
        assert_eq!(board.count(Stone::White), 1);
        assert_eq!(board.stone_count() + board.empty_count(), 64);
    }

    #[test]
    fn test_apply_move_stops_at_first_anchor() {
        let mut board = Board::new();
        // _ W B W B : Black at (0,0) is anchored by the nearest Black disk
        board.set(Pos::new(0, 1), Stone::White);
        board.set(Pos::new(0, 2), Stone::Black);
        board.set(Pos::new(0, 3), Stone::White);
        board.set(Pos::new(0, 4), Stone::Black);

        apply_move(&mut board, Pos::new(0, 0), Stone::Black);
        assert_eq!(board.get(Pos::new(0, 1)), Stone::Black);
        // Beyond the first anchor nothing changes
        assert_eq!(board.get(Pos::new(0, 3)), Stone::White);
    }
}
