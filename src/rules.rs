//! Move legality and board mutation.
//!
//! This module provides the rules engine for disc placement:
//! - Token-to-coordinate parsing for two-character moves
//! - The directional "sandwich" scan shared by legality checks and flips
//! - Legality predicates ([`is_legal`], [`has_any_legal_move`])
//! - Move application with capture flipping ([`apply_move`])
//!
//! Legality is a pure boolean predicate, not an error: callers check
//! [`is_legal`] before mutating, and anything out of range fails closed.

use crate::board::{Board, Cell, PlayerId};
use crate::constants::{Coord, DIRECTIONS, INVALID_COORD};

/// Parse a two-character move token (row letter, column letter) into a
/// coordinate, mapping 'a' to 0. Case insensitive.
///
/// Wrong-length tokens and out-of-alphabet characters yield
/// [`INVALID_COORD`], which every bounds check rejects; the board's own
/// dimensions are enforced later by [`is_legal`].
pub fn parse_move(token: &str) -> Coord {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return INVALID_COORD;
    }
    let row = letter_index(bytes[0]);
    let col = letter_index(bytes[1]);
    match (row, col) {
        (Some(r), Some(c)) => (r, c),
        _ => INVALID_COORD,
    }
}

fn letter_index(b: u8) -> Option<isize> {
    let b = b.to_ascii_lowercase();
    if b.is_ascii_lowercase() {
        Some((b - b'a') as isize)
    } else {
        None
    }
}

/// Convert a coordinate back to its two-letter token (e.g. (0, 1) -> "ab").
///
/// Only meaningful for coordinates in 'a'..='z' range; used for rendering
/// legal-move hints and demo traces.
pub fn format_move((row, col): Coord) -> String {
    debug_assert!(
        (0..26).contains(&row) && (0..26).contains(&col),
        "coordinate ({row},{col}) has no letter token"
    );
    let r = (b'a' + row as u8) as char;
    let c = (b'a' + col as u8) as char;
    format!("{r}{c}")
}

/// Scan one direction from the cell adjacent to a prospective placement.
///
/// (start_row, start_col) is the first cell in the direction of travel,
/// one step away from the placement itself. A capture line exists iff that
/// cell holds an opponent disc and stepping by (row_delta, col_delta)
/// reaches one of `player`'s discs before any empty cell or the edge.
pub fn scan_direction(
    board: &Board,
    player: PlayerId,
    start_row: isize,
    row_delta: isize,
    start_col: isize,
    col_delta: isize,
) -> bool {
    // A capture needs an opponent disc immediately adjacent.
    match board.cell(start_row, start_col) {
        None | Some(Cell::Empty) => return false,
        Some(Cell::Taken(id)) if id == player => return false,
        Some(Cell::Taken(_)) => {}
    }

    let (mut row, mut col) = (start_row + row_delta, start_col + col_delta);
    loop {
        match board.cell(row, col) {
            // Edge or gap before an own disc: the line is not closed.
            None | Some(Cell::Empty) => return false,
            Some(Cell::Taken(id)) if id == player => return true,
            Some(Cell::Taken(_)) => {
                row += row_delta;
                col += col_delta;
            }
        }
    }
}

/// Whether placing `player`'s disc at (row, col) is legal: the cell is on
/// the grid, empty, and at least one direction closes a capture line.
pub fn is_legal(board: &Board, player: PlayerId, row: isize, col: isize) -> bool {
    match board.cell(row, col) {
        Some(Cell::Empty) => {}
        // Occupied or off the grid (including the parse sentinel)
        _ => return false,
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| scan_direction(board, player, row + dr, dr, col + dc, dc))
}

/// Whether `player` has at least one legal placement anywhere on the board.
/// Short-circuits on the first hit.
pub fn has_any_legal_move(board: &Board, player: PlayerId) -> bool {
    for row in 0..board.rows as isize {
        for col in 0..board.cols as isize {
            if is_legal(board, player, row, col) {
                return true;
            }
        }
    }
    false
}

/// All legal placements for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<Coord> {
    let mut moves = Vec::new();
    for row in 0..board.rows as isize {
        for col in 0..board.cols as isize {
            if is_legal(board, player, row, col) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// Place `player`'s disc at (row, col) and flip every captured run.
///
/// Precondition: the caller has already confirmed
/// `is_legal(board, player, row, col)`. This function does not re-validate;
/// an illegal placement silently corrupts the board. Flips walk each
/// capturable direction from the adjacent cell up to (exclusive of) the
/// terminating own disc. No cell is ever reset to empty.
///
/// Returns the board for chaining.
pub fn apply_move(board: &mut Board, player: PlayerId, row: isize, col: isize) -> &mut Board {
    // Capture lines are judged before the new disc goes down, against each
    // placement-adjacent cell.
    let closed: Vec<(isize, isize)> = DIRECTIONS
        .iter()
        .copied()
        .filter(|&(dr, dc)| scan_direction(board, player, row + dr, dr, col + dc, dc))
        .collect();

    board.set(row as usize, col as usize, Cell::Taken(player));

    for (dr, dc) in closed {
        let (mut r, mut c) = (row + dr, col + dc);
        while board.cell(r, c) != Some(Cell::Taken(player)) {
            board.set(r as usize, c as usize, Cell::Taken(player));
            r += dr;
            c += dc;
        }
    }
    board
}
