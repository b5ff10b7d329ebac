//! Reversi-Rust: a two-player disc-flipping board game for the terminal.
//!
//! The crate separates the pure rules engine from the I/O around it:
//!
//! - [`constants`] - Board limits, direction table, player defaults
//! - [`board`] - Grid of cells with the four-disc centre seed
//! - [`rules`] - Move parsing, legality checks, and capture flipping
//! - [`score`] - Disc counting and winner/tie evaluation
//! - [`game`] - Turn-sequencing state machine
//! - [`session`] - Interactive stdin/stdout collaborator
//!
//! ## Example
//!
//! ```
//! use reversi_rust::board::Board;
//! use reversi_rust::game::{Action, Game, Phase, Player};
//! use reversi_rust::rules::parse_move;
//!
//! let board = Board::new(8, 8).unwrap();
//! let players = vec![
//!     Player { color: "black".into(), symbol: 'X', name: "P1".into() },
//!     Player { color: "white".into(), symbol: 'O', name: "P2".into() },
//! ];
//! let mut game = Game::new(board, players);
//!
//! assert_eq!(game.begin_turn(), Phase::Playing);
//! game.step(Action::Move(parse_move("dc")));
//! assert_eq!(game.current_index(), 1);
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod rules;
pub mod score;
pub mod session;
