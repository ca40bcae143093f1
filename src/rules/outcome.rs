//! End-of-game detection and scoring

use crate::board::{Board, Stone, TOTAL_CELLS};

use super::moves::has_legal_move;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Majority of disks
    Win(Stone),
    Draw,
}

impl GameOutcome {
    /// Outcome decided purely by disk count, regardless of whether play ended
    pub fn by_disk_count(board: &Board) -> Self {
        let count = DiskCount::of(board);
        match count.black.cmp(&count.white) {
            std::cmp::Ordering::Greater => GameOutcome::Win(Stone::Black),
            std::cmp::Ordering::Less => GameOutcome::Win(Stone::White),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Stone> {
        match self {
            GameOutcome::Win(stone) => Some(stone),
            GameOutcome::Draw => None,
        }
    }
}

/// Disk tally for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskCount {
    pub black: u32,
    pub white: u32,
    pub empty: u32,
}

impl DiskCount {
    pub fn of(board: &Board) -> Self {
        let black = board.count(Stone::Black);
        let white = board.count(Stone::White);
        Self {
            black,
            white,
            empty: TOTAL_CELLS as u32 - black - white,
        }
    }
}

/// The game is over when neither side can move (this includes a full board).
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Stone::Black) && !has_legal_move(board, Stone::White)
}

/// Result of the game, or `None` while either side can still move.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    is_game_over(board).then(|| GameOutcome::by_disk_count(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_opening_not_over() {
        let board = Board::standard();
        assert!(!is_game_over(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_wipeout_is_over() {
        let mut board = Board::new();
        board.set(Pos::new(3, 3), Stone::Black);
        board.set(Pos::new(3, 4), Stone::Black);

        assert!(is_game_over(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Win(Stone::Black)));
    }

    #[test]
    fn test_full_board_draw() {
        let mut board = Board::new();
        for pos in Board::positions() {
            let stone = if pos.row < 4 { Stone::Black } else { Stone::White };
            board.set(pos, stone);
        }

        assert!(is_game_over(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Draw));
        assert_eq!(outcome(&board).and_then(GameOutcome::winner), None);
    }

    #[test]
    fn test_disk_count() {
        let count = DiskCount::of(&Board::standard());
        assert_eq!(
            count,
            DiskCount {
                black: 2,
                white: 2,
                empty: 60
            }
        );
    }
}
