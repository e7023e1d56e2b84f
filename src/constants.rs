//! Constants for board geometry, search scores, and difficulty settings.
//!
//! The board is a fixed 3x3 grid. Cells are addressed either by `(row, col)`
//! or by their row-major index `row * N + col`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// The 8 winning lines (3 rows, 3 columns, 2 diagonals) as row-major indices.
pub const LINES: [[usize; N]; 8] = [
    [0, 1, 2], // Row 0
    [3, 4, 5], // Row 1
    [6, 7, 8], // Row 2
    [0, 3, 6], // Column 0
    [1, 4, 7], // Column 1
    [2, 5, 8], // Column 2
    [0, 4, 8], // Main diagonal
    [2, 4, 6], // Anti-diagonal
];

// =============================================================================
// Search Scores
// =============================================================================

/// Score of a position won by the searching token.
pub const WIN_SCORE: i32 = 1;

/// Score of a position won by the opponent.
pub const LOSS_SCORE: i32 = -1;

/// Score of a tie or of a position cut off by the depth limit.
pub const NEUTRAL_SCORE: i32 = 0;

// =============================================================================
// Difficulty
// =============================================================================

/// Lowest difficulty level a user can pick (searches 0 extra plies).
pub const MIN_LEVEL: usize = 1;

/// Highest difficulty level a user can pick (searches the full game tree).
pub const MAX_LEVEL: usize = 10;

// =============================================================================
// Simulation Defaults
// =============================================================================

/// Default search depth for both players in batch simulations.
pub const DEFAULT_SIM_DIFFICULTY: usize = 5;

/// Default number of games per simulation.
pub const DEFAULT_SIM_ROUNDS: usize = 100;

/// Highest difficulty covered by the simulation matrix.
pub const MATRIX_MAX_DIFFICULTY: usize = 9;
