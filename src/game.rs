//! Turn sequencing state machine.
//!
//! [`Game`] owns the board and the current-player index for one session.
//! Each turn begins with [`Game::begin_turn`], which ends the game when the
//! player to move has no legal placement; otherwise exactly one [`Action`]
//! is fed to [`Game::step`]. An illegal move leaves the state untouched so
//! the caller can prompt again.

use crate::board::{Board, PlayerId};
use crate::constants::Coord;
use crate::rules::{apply_move, has_any_legal_move, is_legal};
use crate::score::{evaluate_outcome, Outcome};

/// Identity of one participant. Symbols must be distinct between the two
/// players for rendering to make sense; the engine itself tracks ownership
/// by index, never by symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub color: String,
    pub symbol: char,
    pub name: String,
}

/// One player decision for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Coord),
    Skip,
    Quit,
}

/// Session phase. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What a call to [`Game::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The move was legal and has been applied; play passed to the next player.
    Moved,
    /// The turn was skipped; play passed to the next player.
    Skipped,
    /// The move was illegal; same player, caller should retry.
    Rejected,
    /// The game ended (quit, or entered with no legal move available).
    Over,
}

/// A single game session: the board, the players, and whose turn it is.
pub struct Game {
    pub board: Board,
    players: Vec<Player>,
    current: PlayerId,
    phase: Phase,
}

impl Game {
    pub fn new(board: Board, players: Vec<Player>) -> Self {
        Self {
            board,
            players,
            current: 0,
            phase: Phase::Playing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_index(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Start the current player's turn. If they have no legal placement the
    /// game ends here and `Phase::GameOver` is returned; otherwise the
    /// caller should obtain one [`Action`] and feed it to [`step`].
    ///
    /// [`step`]: Game::step
    pub fn begin_turn(&mut self) -> Phase {
        if self.phase == Phase::Playing && !has_any_legal_move(&self.board, self.current) {
            self.phase = Phase::GameOver;
        }
        self.phase
    }

    /// Apply one action for the current player.
    pub fn step(&mut self, action: Action) -> StepResult {
        if self.phase == Phase::GameOver {
            return StepResult::Over;
        }
        match action {
            Action::Quit => {
                self.phase = Phase::GameOver;
                StepResult::Over
            }
            Action::Skip => {
                self.advance();
                StepResult::Skipped
            }
            Action::Move((row, col)) => {
                if !is_legal(&self.board, self.current, row, col) {
                    return StepResult::Rejected;
                }
                apply_move(&mut self.board, self.current, row, col);
                self.advance();
                StepResult::Moved
            }
        }
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Final standings. Meaningful once the phase is `GameOver`, but pure,
    /// so callers may also use it for mid-game score lines.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board, self.players.len())
    }
}
