//! Constants for board geometry, player defaults, and the direction table.
//!
//! The board size is chosen at runtime, so the limits here are validated by
//! [`crate::board::Board::new`] rather than baked in at compile time.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest accepted board dimension.
pub const MIN_SIZE: usize = 4;

/// Largest accepted board dimension (26 rows/columns map onto 'a'..='z').
pub const MAX_SIZE: usize = 26;

/// Board dimension used when the player gives no (or an unusable) size.
pub const DEFAULT_SIZE: usize = 8;

// =============================================================================
// Coordinates
// =============================================================================

/// A (row, column) pair. Signed so the move parser can hand back a sentinel
/// that every bounds check rejects.
pub type Coord = (isize, isize);

/// Sentinel produced for malformed move tokens; always illegal.
pub const INVALID_COORD: Coord = (-1, -1);

// =============================================================================
// Direction Table
// =============================================================================

/// The eight (Δrow, Δcol) unit vectors used by every directional scan.
/// Order: N, NE, E, SE, S, SW, W, NW.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

// =============================================================================
// Player Defaults
// =============================================================================

/// Number of players in a standard game.
pub const NUM_PLAYERS: usize = 2;

/// Default (colour, symbol, name) triples applied when setup input is blank.
pub const DEFAULT_PLAYERS: [(&str, char, &str); NUM_PLAYERS] =
    [("black", 'X', "Player 1"), ("white", 'O', "Player 2")];
