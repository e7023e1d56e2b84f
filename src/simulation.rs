//! Batch simulation of computer-vs-computer games.
//!
//! Each round plays a full game between two computer players at fixed search
//! depths and records the outcome and how long each side spent thinking.
//! Results can be written as CSV rows for later analysis.

use std::io::Write;
use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Outcome, Token};
use crate::constants::MATRIX_MAX_DIFFICULTY;
use crate::game::{Game, MoveResult, Player};
use crate::search::{best_move, best_move_randomized};

/// Column names matching [`SimulationResults::write_csv_row`].
pub const CSV_HEADER: &str = "Total Rounds,Player 1 Wins,Player 1 Difficulty,Player 2 Wins,\
Player 2 Difficulty,Ties,Player 1 Starts First,Player1Duration,Player2Duration,TotalDuration,Random AI";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationResults {
    pub total_rounds: usize,
    pub player1_wins: usize,
    pub player1_difficulty: usize,
    pub player2_wins: usize,
    pub player2_difficulty: usize,
    pub ties: usize,
    pub player1_starts_first: usize,
    /// Wall time for the whole run, in seconds.
    pub total_duration: f64,
    /// Time player 1 spent choosing moves, in seconds.
    pub player1_duration: f64,
    /// Time player 2 spent choosing moves, in seconds.
    pub player2_duration: f64,
    pub random_ai: bool,
}

impl SimulationResults {
    pub fn write_csv_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{:.6},{:.6},{:.6},{}",
            self.total_rounds,
            self.player1_wins,
            self.player1_difficulty,
            self.player2_wins,
            self.player2_difficulty,
            self.ties,
            self.player1_starts_first,
            self.player1_duration,
            self.player2_duration,
            self.total_duration,
            self.random_ai
        )
    }
}

pub fn write_csv_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{CSV_HEADER}")
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    pub player1_difficulty: usize,
    pub player2_difficulty: usize,
    pub rounds: usize,
    /// Use the randomized search for player 2.
    pub random_ai: bool,
}

impl Simulation {
    pub fn new(player1_difficulty: usize, player2_difficulty: usize, rounds: usize, random_ai: bool) -> Self {
        Self {
            player1_difficulty,
            player2_difficulty,
            rounds,
            random_ai,
        }
    }

    pub fn run(&self) -> SimulationResults {
        let mut results = SimulationResults {
            total_rounds: self.rounds,
            player1_difficulty: self.player1_difficulty,
            player2_difficulty: self.player2_difficulty,
            random_ai: self.random_ai,
            ..Default::default()
        };

        let start = Instant::now();
        for round in 0..self.rounds {
            let outcome = self.play_round(&mut results);
            debug!(round, ?outcome, "round finished");
        }
        results.total_duration = start.elapsed().as_secs_f64();

        info!(
            p1 = self.player1_difficulty,
            p2 = self.player2_difficulty,
            p1_wins = results.player1_wins,
            p2_wins = results.player2_wins,
            ties = results.ties,
            "simulation finished"
        );
        results
    }

    fn play_round(&self, results: &mut SimulationResults) -> Outcome {
        let mut game = Game::new(
            Player::computer(Token::X, Some(self.player1_difficulty), "Player 1"),
            Player::computer(Token::O, Some(self.player2_difficulty), "Player 2"),
            false,
        );
        if game.next_player().token == Token::X {
            results.player1_starts_first += 1;
        }

        loop {
            let player = game.next_player();
            let token = player.token;
            let depth = player.difficulty().unwrap_or_default();

            let think = Instant::now();
            let mv = if token == Token::O && self.random_ai {
                best_move_randomized(game.board, depth, token)
            } else {
                best_move(game.board, depth, token)
            };
            let elapsed = think.elapsed().as_secs_f64();
            match token {
                Token::X => results.player1_duration += elapsed,
                Token::O => results.player2_duration += elapsed,
            }

            let Some(mv) = mv else { break };
            if matches!(game.do_move(mv.row, mv.col), MoveResult::Win(_) | MoveResult::Tie) {
                break;
            }
        }

        let outcome = game.outcome();
        match outcome {
            Outcome::Win(Token::X) => results.player1_wins += 1,
            Outcome::Win(Token::O) => results.player2_wins += 1,
            _ => results.ties += 1,
        }
        outcome
    }
}

/// Simulate every pair of difficulties `0..=MATRIX_MAX_DIFFICULTY`.
pub fn run_matrix(rounds: usize) -> Vec<SimulationResults> {
    let mut all = Vec::new();
    for p1 in 0..=MATRIX_MAX_DIFFICULTY {
        for p2 in 0..=MATRIX_MAX_DIFFICULTY {
            all.push(Simulation::new(p1, p2, rounds, false).run());
        }
    }
    all
}
