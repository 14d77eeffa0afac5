//! Headless driver: plays the engine against itself and prints each position.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use connect4_core::{Board, Cell, GameStatus, Player, DEFAULT_COLS, DEFAULT_ROWS};
use connect4_engine::{ConnectFourAI, SearchConfig, TieBreak, DEFAULT_DEPTH};

#[derive(Debug, Parser)]
#[command(name = "connect-four", about = "Connect-Four alpha-beta engine self-play")]
struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Search depth in plies for both sides
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Search root columns in parallel
    #[arg(long)]
    parallel: bool,

    /// Break ties between equally scored columns at random
    #[arg(long)]
    random_ties: bool,

    /// Seed for random tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        let tie_break = if self.random_ties {
            TieBreak::Random
        } else {
            TieBreak::Leftmost
        };
        let config = SearchConfig::default()
            .with_depth(self.depth)
            .with_parallel(self.parallel)
            .with_tie_break(tie_break);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in board.snapshot().iter().rev() {
        for cell in row {
            out.push(match cell {
                Cell::Empty => '.',
                Cell::Token(Player::One) => 'X',
                Cell::Token(Player::Two) => 'O',
            });
            out.push(' ');
        }
        out.push('\n');
    }
    for col in 0..board.cols() {
        out.push_str(&format!("{} ", col % 10));
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let mut board = Board::with_size(args.rows, args.cols).context("invalid board size")?;
    let mut ai = ConnectFourAI::with_config(args.search_config()).context("invalid search settings")?;
    info!(
        "self-play on a {}x{} board at depth {}",
        board.rows(),
        board.cols(),
        ai.depth()
    );

    let mut player = Player::One;
    while board.status() == GameStatus::InProgress {
        ai.play_turn(&mut board, player)?;
        println!("{}\n", render(&board));
        player = player.opponent();
    }

    match board.status() {
        GameStatus::Won(winner) => println!("Player {} wins.", winner.id()),
        GameStatus::Draw => println!("Draw."),
        GameStatus::InProgress => unreachable!("loop exits only on a finished game"),
    }

    Ok(())
}
