//! Othello engine command line
//!
//! `othello move` asks the engine for one move on a given board;
//! `othello play` runs a non-interactive match between two players.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use othello::config::budget_from_secs;
use othello::display::{parse_board, render, render_with_last_move};
use othello::game::{EnginePlayer, Game, GreedyPlayer, Player, RandomPlayer};
use othello::rules::{apply_move, GameOutcome};
use othello::{Board, DisplayConfig, Engine, EngineConfig, MoveResult, Stone};

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Time-bounded Othello engine")]
struct Cli {
    /// Colour the board output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best move for one position
    Move {
        /// Side to move
        #[arg(long, default_value = "black")]
        side: Stone,

        /// Time budget in seconds
        #[arg(long, default_value_t = 5.0)]
        time: f64,

        /// Board file (8 rows of B/W/.); the opening position if omitted
        #[arg(long)]
        board: Option<PathBuf>,

        /// Maximum search depth
        #[arg(long)]
        max_depth: Option<u32>,
    },
    /// Play a full game between two players
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Engine)]
        black: PlayerKind,

        #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
        white: PlayerKind,

        /// Engine time budget per move in seconds
        #[arg(long, default_value_t = 1.0)]
        time: f64,

        /// Seed for random players
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn display_config(self) -> DisplayConfig {
        match self {
            ColorMode::Auto => DisplayConfig::detect(),
            ColorMode::Always => DisplayConfig::colored(),
            ColorMode::Never => DisplayConfig::plain(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerKind {
    Engine,
    Random,
    Greedy,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let display = cli.color.display_config();
    let result = match cli.command {
        Command::Move {
            side,
            time,
            board,
            max_depth,
        } => run_move(side, time, board, max_depth, &display),
        Command::Play {
            black,
            white,
            time,
            seed,
        } => {
            run_play(black, white, time, seed, &display);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` flags pick the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_move(
    side: Stone,
    time: f64,
    board_file: Option<PathBuf>,
    max_depth: Option<u32>,
    display: &DisplayConfig,
) -> Result<(), String> {
    let mut board = match board_file {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            parse_board(&text).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => Board::standard(),
    };

    let config = EngineConfig::default()
        .with_time_limit(budget_from_secs(time))
        .with_max_depth(max_depth);
    let mut engine = Engine::with_config(config);

    print!("{}", render(&board, display));
    println!();

    let result = engine.get_move_with_progress(&board, side, |p| {
        println!("Searched {} plies and got {} ({})", p.plies, p.best_move, p.score);
    });

    match result.best_move {
        MoveResult::Found(pos) => {
            println!("\n{side} moves {pos}\n");
            apply_move(&mut board, pos, side);
            print!("{}", render_with_last_move(&board, display, Some(pos)));
            Ok(())
        }
        MoveResult::NoLegalMove => {
            println!("\n{side} has no legal move and passes");
            Ok(())
        }
        MoveResult::NoCompletedDepth => Err(format!(
            "no search depth completed within {:?}",
            result.budget.unwrap_or(Duration::ZERO)
        )),
    }
}

fn make_player(kind: PlayerKind, time: f64, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Engine => {
            let config = EngineConfig::default().with_time_limit(budget_from_secs(time));
            Box::new(EnginePlayer::new(Engine::with_config(config)))
        }
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::seeded(seed)),
            None => Box::new(RandomPlayer::from_entropy()),
        },
        PlayerKind::Greedy => Box::new(GreedyPlayer),
    }
}

fn run_play(black: PlayerKind, white: PlayerKind, time: f64, seed: Option<u64>, display: &DisplayConfig) {
    let mut black = make_player(black, time, seed);
    // Distinct stream for White when both sides are random
    let mut white = make_player(white, time, seed.map(|s| s.wrapping_add(1)));

    let record = Game::new().play(black.as_mut(), white.as_mut());

    let last_move = record.turns.iter().rev().find_map(|t| t.pos);
    print!("{}", render_with_last_move(&record.board, display, last_move));
    println!("\nResults\n-----------");

    if let Some(reason) = &record.disqualification {
        println!("Disqualified: {reason}");
    }
    let disks = record.disks();
    println!("Black: {} disks", disks.black);
    println!("White: {} disks", disks.white);
    match record.outcome {
        GameOutcome::Win(side) => println!("{side} wins"),
        GameOutcome::Draw => println!("Draw"),
    }
}
