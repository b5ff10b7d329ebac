//! Interactive terminal session.
//!
//! This module is the I/O collaborator around the core engine: it prompts
//! for setup, reads raw lines from stdin, converts them to [`Action`]s, and
//! renders boards and standings to stdout. All rule decisions stay in
//! [`crate::rules`] and [`crate::game`]; nothing here mutates the board
//! directly.
//!
//! ## Session flow
//!
//! 1. Prompt for board size (blank or unusable input falls back to 8).
//! 2. Prompt each player for name, colour, and symbol (blank keeps the
//!    defaults).
//! 3. Loop: render the board, prompt the current player, feed the parsed
//!    action to the turn controller, and report rejections with a hint.
//! 4. On game over, print the final board and standings.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{Board, Cell};
use crate::constants::{DEFAULT_PLAYERS, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::game::{Action, Game, Phase, Player, StepResult};
use crate::rules::{format_move, legal_moves, parse_move};
use crate::score::GameResult;

/// Parse a requested board size, applying the boundary's default policy:
/// anything that is not an even number in [MIN_SIZE, MAX_SIZE] becomes
/// [`DEFAULT_SIZE`].
pub fn parse_size(input: &str) -> usize {
    match input.trim().parse::<usize>() {
        Ok(n) if (MIN_SIZE..=MAX_SIZE).contains(&n) && n % 2 == 0 => n,
        _ => DEFAULT_SIZE,
    }
}

/// Convert one raw input line into an action. The literal tokens `quit`
/// and `skip` are control actions; everything else is treated as a move
/// token (malformed ones become the always-illegal sentinel).
pub fn parse_action(input: &str) -> Action {
    let token = input.trim();
    if token.eq_ignore_ascii_case("quit") {
        Action::Quit
    } else if token.eq_ignore_ascii_case("skip") {
        Action::Skip
    } else {
        Action::Move(parse_move(token))
    }
}

/// Render the board with letter labels matching the move-token alphabet.
pub fn render_board(board: &Board, players: &[Player]) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..board.cols {
        out.push((b'a' + col as u8) as char);
        out.push(' ');
    }
    out.push('\n');
    for row in 0..board.rows {
        out.push((b'a' + row as u8) as char);
        out.push_str("  ");
        for col in 0..board.cols {
            let ch = match board.cell(row as isize, col as isize) {
                Some(Cell::Taken(id)) => players[id].symbol,
                _ => '.',
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// One interactive game over stdin/stdout.
pub struct GameSession {
    game: Game,
}

impl GameSession {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Build a session from interactive prompts. A missing line (EOF)
    /// keeps the defaults for every remaining prompt.
    pub fn setup(size_arg: Option<usize>) -> Result<Self> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let mut prompt = |text: &str| -> Result<String> {
            print!("{text}");
            io::stdout().flush()?;
            match lines.next() {
                Some(line) => Ok(line?),
                None => Ok(String::new()),
            }
        };

        let size = match size_arg {
            Some(n) => parse_size(&n.to_string()),
            None => {
                let line = prompt(&format!("Board size [{DEFAULT_SIZE}]: "))?;
                parse_size(&line)
            }
        };
        let board = Board::new(size, size)?;

        let mut players = Vec::new();
        for (i, (color, symbol, name)) in DEFAULT_PLAYERS.iter().enumerate() {
            let n = i + 1;
            let name_in = prompt(&format!("Player {n} name [{name}]: "))?;
            let color_in = prompt(&format!("Player {n} colour [{color}]: "))?;
            let symbol_in = prompt(&format!("Player {n} symbol [{symbol}]: "))?;
            players.push(Player {
                name: non_blank(&name_in, name),
                color: non_blank(&color_in, color),
                symbol: symbol_in.trim().chars().next().unwrap_or(*symbol),
            });
        }

        Ok(Self::new(Game::new(board, players)))
    }

    /// Run the turn loop until the game ends.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let mut stdout = io::stdout();

        loop {
            if self.game.begin_turn() == Phase::GameOver {
                break;
            }

            writeln!(stdout)?;
            write!(stdout, "{}", render_board(&self.game.board, self.game.players()))?;
            writeln!(stdout, "{}", self.score_line())?;

            let mover = self.game.current_player();
            write!(
                stdout,
                "{} ({}) move [e.g. 'cd', 'skip', 'quit']: ",
                mover.name, mover.symbol
            )?;
            stdout.flush()?;

            let action = match lines.next() {
                Some(line) => parse_action(&line?),
                None => Action::Quit, // EOF ends the session
            };

            match self.game.step(action) {
                StepResult::Moved | StepResult::Skipped => {}
                StepResult::Rejected => {
                    let hints: Vec<String> = legal_moves(&self.game.board, self.game.current_index())
                        .into_iter()
                        .map(format_move)
                        .collect();
                    writeln!(stdout, "Illegal move. Legal moves: {}", hints.join(" "))?;
                }
                StepResult::Over => break,
            }
        }

        writeln!(stdout)?;
        write!(stdout, "{}", render_board(&self.game.board, self.game.players()))?;
        writeln!(stdout, "Game over. {}", self.score_line())?;
        match self.game.outcome().result {
            GameResult::Winner(id) => {
                let winner = &self.game.players()[id];
                writeln!(stdout, "{} ({}) wins!", winner.name, winner.color)?;
            }
            GameResult::Tie => writeln!(stdout, "It's a tie.")?,
        }
        Ok(())
    }

    fn score_line(&self) -> String {
        let outcome = self.game.outcome();
        self.game
            .players()
            .iter()
            .zip(&outcome.scores)
            .map(|(p, s)| format!("{} ({}): {s}", p.name, p.symbol))
            .collect::<Vec<_>>()
            .join("   ")
    }
}

fn non_blank(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
