//! Non-interactive match runner
//!
//! Plays a full game between two [`Player`]s, enforcing the rules the players
//! themselves are trusted with: a move must be legal, a pass is only allowed
//! without a legal move, and an optional per-move time limit is checked after
//! each answer. Breaking a rule disqualifies the offender.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::board::{Board, Pos, Stone};
use crate::engine::Engine;
use crate::error::GameError;
use crate::rules::{apply_move, has_legal_move, is_legal_move, legal_moves, DiskCount, GameOutcome};
use crate::search::MoveResult;

/// A participant in a match.
pub trait Player {
    /// Display name used in logs and results
    fn name(&self) -> &str;

    /// Pick a move for `side`, or `None` to pass.
    fn choose_move(&mut self, board: &Board, side: Stone) -> Option<Pos>;
}

/// Player backed by the search engine.
pub struct EnginePlayer {
    engine: Engine,
}

impl EnginePlayer {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }
}

impl Player for EnginePlayer {
    fn name(&self) -> &str {
        "engine"
    }

    fn choose_move(&mut self, board: &Board, side: Stone) -> Option<Pos> {
        match self.engine.get_move_with_stats(board, side).best_move {
            MoveResult::Found(pos) => Some(pos),
            MoveResult::NoLegalMove => None,
            // Nothing finished in time; any legal move beats forfeiting
            MoveResult::NoCompletedDepth => {
                warn!(side = %side, "no depth completed, playing first legal move");
                legal_moves(board, side).first().copied()
            }
        }
    }
}

/// Uniformly random legal moves.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Reproducible player for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, side: Stone) -> Option<Pos> {
        legal_moves(board, side).choose(&mut self.rng).copied()
    }
}

/// Always plays the first legal move in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlayer;

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, board: &Board, side: Stone) -> Option<Pos> {
        legal_moves(board, side).first().copied()
    }
}

/// One turn of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub side: Stone,
    /// `None` for a pass
    pub pos: Option<Pos>,
    pub elapsed: Duration,
}

/// Everything that happened in a match.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Accepted turns, in order
    pub turns: Vec<Turn>,
    pub board: Board,
    pub outcome: GameOutcome,
    /// Set when the game ended by a rule violation
    pub disqualification: Option<GameError>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Stone> {
        self.outcome.winner()
    }

    pub fn disks(&self) -> DiskCount {
        DiskCount::of(&self.board)
    }
}

/// Match runner.
///
/// # Example
///
/// ```
/// use othello::game::{Game, GreedyPlayer, RandomPlayer};
///
/// let mut black = GreedyPlayer;
/// let mut white = RandomPlayer::seeded(7);
/// let record = Game::new().play(&mut black, &mut white);
/// assert!(record.disqualification.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Game {
    move_time_limit: Option<Duration>,
}

impl Game {
    /// Runner with no move time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disqualify any player whose answer takes longer than `limit`.
    #[must_use]
    pub fn with_move_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.move_time_limit = limit;
        self
    }

    /// Play one game from the standard opening, Black to move, and report
    /// the result. Every call starts a fresh game.
    pub fn play(&self, black: &mut dyn Player, white: &mut dyn Player) -> GameRecord {
        let mut board = Board::standard();
        let mut turns = Vec::new();
        let mut side = Stone::Black;
        let mut passes = 0;

        info!(black = black.name(), white = white.name(), "game started");

        while !board.is_full() && passes < 2 {
            let player: &mut dyn Player = match side {
                Stone::Black => &mut *black,
                _ => &mut *white,
            };

            let start = Instant::now();
            let choice = player.choose_move(&board, side);
            let elapsed = start.elapsed();

            if let Err(err) = self.check_turn(&board, side, choice, elapsed) {
                return disqualify(turns, board, side, err);
            }

            match choice {
                Some(pos) => {
                    apply_move(&mut board, pos, side);
                    passes = 0;
                    let disks = DiskCount::of(&board);
                    info!(
                        "{} moves {} (Black {} / White {})",
                        side, pos, disks.black, disks.white
                    );
                }
                None => {
                    passes += 1;
                    info!("{} passes", side);
                }
            }

            turns.push(Turn {
                side,
                pos: choice,
                elapsed,
            });
            side = side.opponent();
        }

        let outcome = GameOutcome::by_disk_count(&board);
        info!(?outcome, "game over");

        GameRecord {
            turns,
            board,
            outcome,
            disqualification: None,
        }
    }

    fn check_turn(
        &self,
        board: &Board,
        side: Stone,
        choice: Option<Pos>,
        elapsed: Duration,
    ) -> Result<(), GameError> {
        if let Some(limit) = self.move_time_limit {
            if elapsed > limit {
                return Err(GameError::MoveTimeout {
                    side,
                    elapsed,
                    limit,
                });
            }
        }

        match choice {
            Some(pos) if !is_legal_move(board, pos, side) => {
                Err(GameError::IllegalMove { side, pos })
            }
            None if has_legal_move(board, side) => Err(GameError::IllegalPass { side }),
            _ => Ok(()),
        }
    }
}

fn disqualify(turns: Vec<Turn>, board: Board, side: Stone, err: GameError) -> GameRecord {
    warn!("{} is disqualified: {}", side, err);
    GameRecord {
        turns,
        board,
        outcome: GameOutcome::Win(side.opponent()),
        disqualification: Some(err),
    }
}
