//! Disc counting and end-of-game outcome evaluation.

use crate::board::{Board, Cell, PlayerId};

/// End-of-game result: either a unique highest scorer or a tie among two or
/// more players at the maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Winner(PlayerId),
    Tie,
}

/// Final standings: per-player disc counts plus the winner/tie verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub scores: Vec<usize>,
    pub result: GameResult,
}

/// Number of cells owned by `player`. O(rows * cols).
pub fn score(board: &Board, player: PlayerId) -> usize {
    board
        .cells()
        .filter(|&c| c == Cell::Taken(player))
        .count()
}

/// Compute every player's score and decide the result.
///
/// The scan keeps a running maximum together with a count of players
/// sitting at it: an equal score joins the tie, a strictly higher score
/// replaces the leader and clears it. A tie flag alone would stay stuck
/// after two low scorers matched, even once a strict maximum appeared.
pub fn evaluate_outcome(board: &Board, num_players: usize) -> Outcome {
    let scores: Vec<usize> = (0..num_players).map(|p| score(board, p)).collect();

    let mut leader = 0;
    let mut at_max = 1;
    for (player, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[leader] {
            leader = player;
            at_max = 1;
        } else if s == scores[leader] {
            at_max += 1;
        }
    }

    let result = if at_max > 1 {
        GameResult::Tie
    } else {
        GameResult::Winner(leader)
    };
    Outcome { scores, result }
}
