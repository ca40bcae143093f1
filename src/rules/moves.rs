//! Legal move enumeration

use crate::board::{Board, Pos, Stone};

use super::capture::would_capture;

/// Check if `stone` may play at `pos`: the cell is empty and the move captures.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    board.is_empty(pos) && would_capture(board, pos, stone)
}

/// All legal moves for `stone`, in row-major order.
///
/// An empty result means `stone` must pass.
pub fn legal_moves(board: &Board, stone: Stone) -> Vec<Pos> {
    Board::positions()
        .filter(|&pos| is_legal_move(board, pos, stone))
        .collect()
}

/// Number of legal moves for `stone`.
pub fn legal_move_count(board: &Board, stone: Stone) -> u32 {
    Board::positions()
        .filter(|&pos| is_legal_move(board, pos, stone))
        .count() as u32
}

/// Check if `stone` has any legal move.
pub fn has_legal_move(board: &Board, stone: Stone) -> bool {
    Board::positions().any(|pos| is_legal_move(board, pos, stone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_black() {
        let board = Board::standard();
        let moves = legal_moves(&board, Stone::Black);
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 3),
                Pos::new(3, 2),
                Pos::new(4, 5),
                Pos::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_opening_moves_white() {
        let board = Board::standard();
        let moves = legal_moves(&board, Stone::White);
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 4),
                Pos::new(3, 5),
                Pos::new(4, 2),
                Pos::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_occupied_cell_is_never_legal() {
        let board = Board::standard();
        assert!(!is_legal_move(&board, Pos::new(3, 3), Stone::Black));
        assert!(!is_legal_move(&board, Pos::new(3, 4), Stone::White));
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        let board = Board::new();
        assert!(legal_moves(&board, Stone::Black).is_empty());
        assert!(!has_legal_move(&board, Stone::White));
        assert_eq!(legal_move_count(&board, Stone::Black), 0);
    }

    #[test]
    fn test_count_matches_list() {
        let board = Board::standard();
        assert_eq!(
            legal_move_count(&board, Stone::Black) as usize,
            legal_moves(&board, Stone::Black).len()
        );
        assert!(has_legal_move(&board, Stone::Black));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        for pos in Board::positions() {
            let stone = if pos.to_index() % 3 == 0 {
                Stone::White
            } else {
                Stone::Black
            };
            board.set(pos, stone);
        }
        assert!(legal_moves(&board, Stone::Black).is_empty());
        assert!(legal_moves(&board, Stone::White).is_empty());
    }
}
