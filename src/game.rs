//! Game session bookkeeping: players, turn order, and move results.

use tracing::{debug, info};

use crate::board::{Board, Move, Outcome, Token};
use crate::constants::{MAX_LEVEL, MIN_LEVEL};
use crate::search::{best_move, best_move_randomized};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    /// Computer opponent. `difficulty` is the search depth; `None` until the
    /// user has picked a level.
    Computer { difficulty: Option<usize> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub token: Token,
    pub kind: PlayerKind,
    pub name: String,
}

impl Player {
    pub fn human(token: Token, name: impl Into<String>) -> Self {
        Self {
            token,
            kind: PlayerKind::Human,
            name: name.into(),
        }
    }

    pub fn computer(token: Token, difficulty: Option<usize>, name: impl Into<String>) -> Self {
        Self {
            token,
            kind: PlayerKind::Computer { difficulty },
            name: name.into(),
        }
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer { .. })
    }

    pub fn needs_difficulty(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer { difficulty: None })
    }

    pub fn difficulty(&self) -> Option<usize> {
        match self.kind {
            PlayerKind::Computer { difficulty } => difficulty,
            PlayerKind::Human => None,
        }
    }
}

/// Result of [`Game::do_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Placed; the turn passes to the other player.
    Valid,
    /// Occupied or off-board cell, or the game is already over.
    Rejected,
    Win(Token),
    Tie,
}

pub struct Game {
    pub board: Board,
    players: [Player; 2],
    /// Index into `players` of whoever moves next.
    next: usize,
    random_ai: bool,
}

impl Game {
    /// Start a game on an empty board. Player 1 moves first.
    pub fn new(player1: Player, player2: Player, random_ai: bool) -> Self {
        Self {
            board: Board::new(),
            players: [player1, player2],
            next: 0,
            random_ai,
        }
    }

    pub fn player(&self, n: usize) -> &Player {
        &self.players[n]
    }

    pub fn next_player(&self) -> &Player {
        &self.players[self.next]
    }

    pub fn random_ai(&self) -> bool {
        self.random_ai
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Index of the first computer player still waiting for a difficulty.
    pub fn needs_difficulty(&self) -> Option<usize> {
        self.players.iter().position(Player::needs_difficulty)
    }

    /// Set the search depth of player `n` from a user-facing level.
    ///
    /// Returns `false` if the level is out of range or `n` is not a computer.
    pub fn set_level(&mut self, n: usize, level: usize) -> bool {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return false;
        }
        match &mut self.players[n].kind {
            PlayerKind::Computer { difficulty } => {
                *difficulty = Some(level - 1);
                info!(player = n + 1, level, "computer difficulty set");
                true
            }
            PlayerKind::Human => false,
        }
    }

    /// Place the next player's token at `(row, col)`.
    pub fn do_move(&mut self, row: usize, col: usize) -> MoveResult {
        if self.outcome() != Outcome::Ongoing {
            return MoveResult::Rejected;
        }

        let token = self.next_player().token;
        if !self.board.place_token(row, col, token) {
            return MoveResult::Rejected;
        }
        debug!(%token, row, col, "move played");

        match self.board.outcome() {
            Outcome::Win(winner) => MoveResult::Win(winner),
            Outcome::Tie => MoveResult::Tie,
            Outcome::Ongoing => {
                self.next = 1 - self.next;
                MoveResult::Valid
            }
        }
    }

    /// Ask the search engine for the next player's move.
    ///
    /// Returns `None` if the next player is human, has no difficulty yet, or
    /// the board is full.
    pub fn computer_move(&self) -> Option<Move> {
        let player = self.next_player();
        let depth = player.difficulty()?;
        if self.random_ai {
            best_move_randomized(self.board, depth, player.token)
        } else {
            best_move(self.board, depth, player.token)
        }
    }
}
