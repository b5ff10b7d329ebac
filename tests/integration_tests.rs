//! Integration tests for reversi-rust.
//!
//! These exercise the public API the way the terminal session does: boards
//! are either seeded fresh, set up directly with `Board::set`, or driven
//! through the turn controller with parsed move tokens.

use reversi_rust::board::{Board, Cell};
use reversi_rust::game::{Action, Game, Phase, Player, StepResult};
use reversi_rust::rules::{apply_move, has_any_legal_move, is_legal, legal_moves, parse_move};
use reversi_rust::score::{evaluate_outcome, score, GameResult};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn two_players() -> Vec<Player> {
    vec![
        Player {
            color: "black".into(),
            symbol: 'X',
            name: "Player 1".into(),
        },
        Player {
            color: "white".into(),
            symbol: 'O',
            name: "Player 2".into(),
        },
    ]
}

/// Place discs directly, bypassing legality. Rows are strings of
/// '.' (empty), 'X' (player 0), 'O' (player 1).
fn setpos(rows: &[&str]) -> Board {
    let mut board = Board::new(rows.len(), rows[0].len()).unwrap();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let cell = match ch {
                'X' => Cell::Taken(0),
                'O' => Cell::Taken(1),
                _ => Cell::Empty,
            };
            board.set(r, c, cell);
        }
    }
    board
}

/// Drive a fresh 8x8 game through a sequence of move tokens, panicking on
/// any rejection so a broken setup fails loudly.
fn play_tokens(tokens: &[&str]) -> Game {
    let mut game = Game::new(Board::new(8, 8).unwrap(), two_players());
    for token in tokens {
        assert_eq!(game.begin_turn(), Phase::Playing, "stuck before {token}");
        let result = game.step(Action::Move(parse_move(token)));
        assert_eq!(result, StepResult::Moved, "move {token} rejected");
    }
    game
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_occupied_and_out_of_bounds_are_illegal() {
    let board = Board::new(8, 8).unwrap();
    for player in 0..2 {
        // The four seeded cells are occupied.
        for (r, c) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
            assert!(!is_legal(&board, player, r, c));
        }
        assert!(!is_legal(&board, player, -1, 0));
        assert!(!is_legal(&board, player, 0, -1));
        assert!(!is_legal(&board, player, 8, 0));
        assert!(!is_legal(&board, player, 0, 8));
    }
}

#[test]
fn test_occupied_cell_illegal_regardless_of_surroundings() {
    // (1,2) would be a capture square for X if it were empty; occupying it
    // must make it illegal no matter what surrounds it.
    let board = setpos(&["....", "XOO.", "....", "...."]);
    assert!(is_legal(&board, 0, 1, 3));
    let board = setpos(&["....", "XOOX", "....", "...."]);
    assert!(!is_legal(&board, 0, 1, 3));
}

#[test]
fn test_malformed_tokens_fail_closed() {
    let board = Board::new(8, 8).unwrap();
    for token in ["", "d", "d3c", "3d", "??"] {
        let (row, col) = parse_move(token);
        assert_eq!((row, col), (-1, -1), "token {token:?}");
        assert!(!is_legal(&board, 0, row, col));
    }
}

#[test]
fn test_legal_iff_sandwich_exists() {
    // No adjacent opponent: illegal everywhere except next to the seed.
    let board = Board::new(8, 8).unwrap();
    assert!(!is_legal(&board, 0, 0, 0));
    // Opponent run without a terminating own disc: illegal.
    let open_run = setpos(&["....", ".OO.", "....", "...."]);
    assert!(!is_legal(&open_run, 0, 1, 0));
    // Same run, closed: legal.
    let closed_run = setpos(&["....", ".OOX", "....", "...."]);
    assert!(is_legal(&closed_run, 0, 1, 0));
}

// =============================================================================
// Flipping
// =============================================================================

#[test]
fn test_seeded_flank_flips_sandwiched_disc() {
    // From the standard seed, O (player 1) at (2,4) flanks the single X at
    // (3,4) against the O at (4,4).
    let mut board = Board::new(8, 8).unwrap();
    assert!(is_legal(&board, 1, 2, 4));
    apply_move(&mut board, 1, 2, 4);
    assert_eq!(board.cell(2, 4), Some(Cell::Taken(1)));
    assert_eq!(board.cell(3, 4), Some(Cell::Taken(1)));
    assert_eq!(board.cell(4, 4), Some(Cell::Taken(1)));
    // The other seeded discs are untouched.
    assert_eq!(board.cell(3, 3), Some(Cell::Taken(1)));
    assert_eq!(board.cell(4, 3), Some(Cell::Taken(0)));
    assert_eq!(score(&board, 1), 4);
    assert_eq!(score(&board, 0), 1);
}

#[test]
fn test_apply_move_monotonic_over_a_full_game() {
    let mut game = Game::new(Board::new(8, 8).unwrap(), two_players());
    fastrand::seed(7);

    while game.begin_turn() == Phase::Playing {
        let mover = game.current_index();
        let opponent = 1 - mover;
        let before_mover = score(&game.board, mover);
        let before_opponent = score(&game.board, opponent);

        let moves = legal_moves(&game.board, mover);
        let pick = moves[fastrand::usize(..moves.len())];
        assert_eq!(game.step(Action::Move(pick)), StepResult::Moved);

        // The mover gains at least the placed disc; the opponent never gains.
        assert!(score(&game.board, mover) > before_mover);
        assert!(score(&game.board, opponent) <= before_opponent);
        // Flips never reset cells, so the occupancy sum stays consistent.
        assert_eq!(
            score(&game.board, 0) + score(&game.board, 1),
            game.board.occupied()
        );
    }
    assert_eq!(game.phase(), Phase::GameOver);
}

// =============================================================================
// Scoring and outcomes
// =============================================================================

#[test]
fn test_score_idempotent_and_sums_to_occupied() {
    let game = play_tokens(&["dc", "cc", "cd"]);
    let first = score(&game.board, 0);
    assert_eq!(score(&game.board, 0), first);
    assert_eq!(
        score(&game.board, 0) + score(&game.board, 1),
        game.board.occupied()
    );
}

#[test]
fn test_equal_max_is_a_tie() {
    let board = setpos(&["XXXX", "XXXX", "OOOO", "OOOO"]);
    let outcome = evaluate_outcome(&board, 2);
    assert_eq!(outcome.scores, vec![8, 8]);
    assert_eq!(outcome.result, GameResult::Tie);
}

#[test]
fn test_unique_max_is_sole_winner() {
    let board = setpos(&["XXXX", "XXXX", "XOOO", "OOOO"]);
    let outcome = evaluate_outcome(&board, 2);
    assert_eq!(outcome.scores, vec![9, 7]);
    assert_eq!(outcome.result, GameResult::Winner(0));
}

// =============================================================================
// Turn controller
// =============================================================================

#[test]
fn test_opening_moves_alternate_players() {
    let game = play_tokens(&["dc", "cc"]);
    assert_eq!(game.current_index(), 0);
    assert_eq!(game.board.occupied(), 6);
}

#[test]
fn test_rejected_move_allows_retry() {
    let mut game = Game::new(Board::new(8, 8).unwrap(), two_players());
    game.begin_turn();
    assert_eq!(
        game.step(Action::Move(parse_move("aa"))),
        StepResult::Rejected
    );
    // Same player retries with a legal move.
    assert_eq!(game.current_index(), 0);
    assert_eq!(game.step(Action::Move(parse_move("dc"))), StepResult::Moved);
}

#[test]
fn test_full_board_has_no_legal_move_and_ends_game() {
    let full = setpos(&[
        "XXXXOOOO",
        "XXXXOOOO",
        "XXXXOOOO",
        "XXXXOOOO",
        "OOOOXXXX",
        "OOOOXXXX",
        "OOOOXXXX",
        "OOOOXXXX",
    ]);
    assert!(!has_any_legal_move(&full, 0));
    assert!(!has_any_legal_move(&full, 1));

    let mut game = Game::new(full, two_players());
    assert_eq!(game.begin_turn(), Phase::GameOver);
    assert_eq!(game.outcome().result, GameResult::Tie);
}

#[test]
fn test_quit_is_immediate_game_over() {
    let mut game = Game::new(Board::new(8, 8).unwrap(), two_players());
    assert_eq!(game.begin_turn(), Phase::Playing);
    assert_eq!(game.step(Action::Quit), StepResult::Over);
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn test_skip_hands_turn_to_opponent() {
    let mut game = Game::new(Board::new(8, 8).unwrap(), two_players());
    game.begin_turn();
    assert_eq!(game.step(Action::Skip), StepResult::Skipped);
    assert_eq!(game.current_index(), 1);
    assert_eq!(game.board.occupied(), 4);
}

#[test]
fn test_demo_style_game_terminates_on_small_board() {
    fastrand::seed(42);
    let board = Board::new(4, 4).unwrap();
    let mut game = Game::new(board, two_players());

    let mut turns = 0;
    while game.begin_turn() == Phase::Playing {
        let moves = legal_moves(&game.board, game.current_index());
        let pick = moves[fastrand::usize(..moves.len())];
        game.step(Action::Move(pick));
        turns += 1;
        assert!(turns <= 16, "game ran past the cell count");
    }
    assert_eq!(game.phase(), Phase::GameOver);
    let outcome = game.outcome();
    assert_eq!(
        outcome.scores.iter().sum::<usize>(),
        game.board.occupied()
    );
}
