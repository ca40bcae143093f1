//! Search tree nodes

use crate::board::{Board, Pos, Stone};
use crate::rules::apply_move;

/// One position in the game tree.
///
/// Nodes own their board. Apart from the root's children, a node lives only
/// for the recursive call that expands it.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    /// Plies from the search root
    pub depth: u32,
    /// Side that just moved to reach this node
    pub player: Stone,
    /// Move that produced this node (`None` at the root)
    pub last_move: Option<Pos>,
    /// Leaf evaluation or backed-up bound
    pub score: f64,
}

impl SearchNode {
    /// Root node for `side` to move. Its last mover is seeded as the opponent.
    pub fn root(board: Board, side: Stone) -> Self {
        Self {
            board,
            depth: 0,
            player: side.opponent(),
            last_move: None,
            score: 0.0,
        }
    }

    /// Side to move at this node
    #[inline]
    pub fn side_to_move(&self) -> Stone {
        self.player.opponent()
    }

    /// Child reached by `mover` playing the (legal) move `mv`.
    pub fn child(&self, mv: Pos, mover: Stone) -> Self {
        let mut board = self.board;
        apply_move(&mut board, mv, mover);
        Self {
            board,
            depth: self.depth + 1,
            player: mover,
            last_move: Some(mv),
            score: 0.0,
        }
    }
}
