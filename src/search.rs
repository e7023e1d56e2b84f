//! Exhaustive minimax search for the computer player.
//!
//! This module implements plain minimax (no pruning, no heuristic):
//! - Wins for the searching token score +1, losses -1
//! - Full boards and positions at the depth limit score 0
//! - Candidate moves are enumerated by a pluggable [`MoveOrder`]
//!
//! The enumeration order only decides which of several equally scored moves
//! is returned: the first one visited wins, since the best move is replaced
//! only on a strictly higher score.

use tracing::{debug, error, trace};

use crate::board::{Board, Cell, Move, Token};
use crate::constants::{CELLS, LOSS_SCORE, NEUTRAL_SCORE, WIN_SCORE};

/// Strategy deciding where enumeration of a node's open cells begins.
pub trait MoveOrder {
    /// Row-major index of the first cell to visit on `board`.
    fn start_index(&mut self, board: &Board) -> usize;

    /// Open cells of `board`, starting at [`Self::start_index`] and wrapping
    /// around in row-major order.
    fn open_cells(&mut self, board: &Board) -> OpenCells {
        let start = self.start_index(board);
        OpenCells::new(*board, start)
    }
}

/// Iterator over the open cells of a board snapshot.
///
/// Walks all cells once in row-major order starting at `start` and wrapping,
/// yielding only those that were empty in the snapshot. Every open cell is
/// yielded exactly once.
pub struct OpenCells {
    board: Board,
    start: usize,
    visited: usize,
}

impl OpenCells {
    pub fn new(board: Board, start: usize) -> Self {
        Self {
            board,
            start: start % CELLS,
            visited: 0,
        }
    }
}

impl Iterator for OpenCells {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while self.visited < CELLS {
            let idx = (self.start + self.visited) % CELLS;
            self.visited += 1;
            if self.board.cell_at(idx) == Cell::Empty {
                return Some(Move::from_index(idx));
            }
        }
        None
    }
}

/// Fixed row-major order: (0,0), (0,1), ... (2,2).
#[derive(Copy, Clone, Debug, Default)]
pub struct RowMajor;

impl MoveOrder for RowMajor {
    fn start_index(&mut self, _board: &Board) -> usize {
        0
    }
}

/// Row-major order starting from a uniformly random open cell.
///
/// A new start is drawn every time a node is enumerated.
pub struct RandomStart {
    rng: fastrand::Rng,
}

impl Default for RandomStart {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStart {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Create an order with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl MoveOrder for RandomStart {
    fn start_index(&mut self, board: &Board) -> usize {
        let open: Vec<usize> = (0..CELLS)
            .filter(|&i| board.cell_at(i) == Cell::Empty)
            .collect();
        if open.is_empty() {
            return 0;
        }
        open[self.rng.usize(..open.len())]
    }
}

/// Best move for `token` searching `max_depth` plies past the reply,
/// enumerating candidates in row-major order.
///
/// Returns `None` if the board is full.
pub fn best_move(board: Board, max_depth: usize, token: Token) -> Option<Move> {
    best_move_with(board, max_depth, token, &mut RowMajor)
}

/// Same as [`best_move`], but every node starts enumeration at a random open
/// cell, so ties between equally good moves are broken randomly.
pub fn best_move_randomized(board: Board, max_depth: usize, token: Token) -> Option<Move> {
    best_move_with(board, max_depth, token, &mut RandomStart::new())
}

/// Run the search with an explicit enumeration order.
pub fn best_move_with<O: MoveOrder>(
    board: Board,
    max_depth: usize,
    token: Token,
    order: &mut O,
) -> Option<Move> {
    let mut best = None;
    let mut best_score = i32::MIN;

    for mv in order.open_cells(&board) {
        let child = simulate(&board, mv, token);
        let score = minimax(&child, 0, false, max_depth, token, order);
        trace!(row = mv.row, col = mv.col, score, "candidate scored");

        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    match best {
        Some(mv) => debug!(%token, max_depth, %mv, score = best_score, "best move chosen"),
        None => debug!(%token, "no open cells"),
    }
    best
}

/// Score `board` from `token`'s point of view.
///
/// `maximizing` tells whose turn it is: `token`'s when true, the opponent's
/// otherwise. Terminal checks run in a fixed order: opponent win, own win,
/// then full board or depth limit.
pub fn minimax<O: MoveOrder>(
    board: &Board,
    depth: usize,
    maximizing: bool,
    max_depth: usize,
    token: Token,
    order: &mut O,
) -> i32 {
    let opponent = token.opponent();

    if board.check_win_for_player(opponent) {
        return LOSS_SCORE;
    } else if board.check_win_for_player(token) {
        return WIN_SCORE;
    } else if board.check_tie() || depth == max_depth {
        return NEUTRAL_SCORE;
    }

    let depth = depth + 1;
    let side = if maximizing { token } else { opponent };

    let mut result = if maximizing { i32::MIN } else { i32::MAX };
    for mv in order.open_cells(board) {
        let child = simulate(board, mv, side);
        let score = minimax(&child, depth, !maximizing, max_depth, token, order);
        result = if maximizing {
            result.max(score)
        } else {
            result.min(score)
        };
    }
    result
}

/// Copy of `board` with `token` placed at `mv`.
///
/// Panics if the cell is taken: enumeration only yields open cells, so an
/// occupied target is a bug in the move order.
fn simulate(board: &Board, mv: Move, token: Token) -> Board {
    let mut child = *board;
    if !child.place_token(mv.row, mv.col, token) {
        error!(%mv, %token, "move enumeration yielded an occupied cell");
        panic!("tried to place {token} on occupied cell {mv} during search");
    }
    child
}
