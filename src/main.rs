//! Reversi-Rust: a terminal disc-flipping game.
//!
//! ## Usage
//!
//! - `reversi-rust` - Play an interactive game
//! - `reversi-rust play --size 10` - Play on a 10x10 board
//! - `reversi-rust demo` - Watch a random self-play game

use anyhow::Result;
use clap::{Parser, Subcommand};

use reversi_rust::board::Board;
use reversi_rust::constants::DEFAULT_PLAYERS;
use reversi_rust::game::{Action, Game, Phase, Player};
use reversi_rust::rules::{format_move, legal_moves};
use reversi_rust::score::GameResult;
use reversi_rust::session::{parse_size, render_board, GameSession};

/// Reversi-Rust: a terminal disc-flipping game
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive two-player game
    Play {
        /// Board size (even, 4 to 26); prompted for when omitted
        #[arg(long)]
        size: Option<usize>,
    },
    /// Run a random self-play game to completion
    Demo {
        /// Board size (even, 4 to 26)
        #[arg(long, default_value_t = 8)]
        size: usize,
        /// Seed for the random move picker
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { size, seed }) => run_demo(size, seed),
        Some(Commands::Play { size }) => run_play(size),
        None => run_play(None),
    }
}

fn run_play(size: Option<usize>) -> Result<()> {
    let mut session = GameSession::setup(size)?;
    session.run()
}

/// Self-play with uniformly random legal moves, printing the move trace
/// and final standings.
fn run_demo(size: usize, seed: Option<u64>) -> Result<()> {
    if let Some(seed) = seed {
        fastrand::seed(seed);
    }

    let size = parse_size(&size.to_string());
    let board = Board::new(size, size)?;
    let players: Vec<Player> = DEFAULT_PLAYERS
        .iter()
        .map(|(color, symbol, name)| Player {
            color: color.to_string(),
            symbol: *symbol,
            name: name.to_string(),
        })
        .collect();
    let mut game = Game::new(board, players);

    let mut turn = 1;
    while game.begin_turn() == Phase::Playing {
        let moves = legal_moves(&game.board, game.current_index());
        let pick = moves[fastrand::usize(..moves.len())];
        let symbol = game.current_player().symbol;
        println!("{turn:3}. {symbol} plays {}", format_move(pick));
        game.step(Action::Move(pick));
        turn += 1;
    }

    println!();
    print!("{}", render_board(&game.board, game.players()));
    let outcome = game.outcome();
    for (player, score) in game.players().iter().zip(&outcome.scores) {
        println!("{} ({}): {score}", player.name, player.symbol);
    }
    match outcome.result {
        GameResult::Winner(id) => println!("{} wins!", game.players()[id].name),
        GameResult::Tie => println!("It's a tie."),
    }
    Ok(())
}
