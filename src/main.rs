//! Tictactoe-Rust: tic-tac-toe against minimax computer players.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Play in the console
//! - `tictactoe-rust play --random-ai` - Play with randomized tie-breaking
//! - `tictactoe-rust simulate --p1 3 --p2 9 -r 100` - Batch simulation
//! - `tictactoe-rust simulate --matrix` - Every difficulty pair, as CSV

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tictactoe_rust::console::ConsoleSession;
use tictactoe_rust::constants::{DEFAULT_SIM_DIFFICULTY, DEFAULT_SIM_ROUNDS};
use tictactoe_rust::simulation::{Simulation, run_matrix, write_csv_header};

/// Tictactoe-Rust: tic-tac-toe with minimax computer players
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the console
    Play {
        /// Break ties between equally good computer moves randomly
        #[arg(long)]
        random_ai: bool,
    },
    /// Pit two computer players against each other and print CSV results
    Simulate {
        /// Search depth for player 1 (X)
        #[arg(long, default_value_t = DEFAULT_SIM_DIFFICULTY)]
        p1: usize,
        /// Search depth for player 2 (O)
        #[arg(long, default_value_t = DEFAULT_SIM_DIFFICULTY)]
        p2: usize,
        /// Number of games to play
        #[arg(short, long, default_value_t = DEFAULT_SIM_ROUNDS)]
        rounds: usize,
        /// Use the randomized search for player 2
        #[arg(long)]
        random_ai: bool,
        /// Run every pair of depths 0-9 instead of a single simulation
        #[arg(long)]
        matrix: bool,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(Commands::Simulate {
            p1,
            p2,
            rounds,
            random_ai,
            matrix,
        }) => {
            if matrix {
                run_simulation_matrix(rounds)
            } else {
                run_simulation(p1, p2, rounds, random_ai)
            }
        }
        Some(Commands::Play { random_ai }) => play(random_ai),
        None => play(false),
    }
}

fn play(random_ai: bool) -> Result<()> {
    let mut session = ConsoleSession::new(random_ai);
    session.run(io::stdin().lock(), io::stdout())
}

fn run_simulation(p1: usize, p2: usize, rounds: usize, random_ai: bool) -> Result<()> {
    let results = Simulation::new(p1, p2, rounds, random_ai).run();

    let mut out = io::stdout().lock();
    writeln!(out, "Simulation Results")?;
    writeln!(out, "Player 1 wins: {}", results.player1_wins)?;
    writeln!(out, "Player 2 wins: {}", results.player2_wins)?;
    writeln!(out, "Ties: {}", results.ties)?;
    writeln!(out, "Duration (seconds): {:.6}", results.total_duration)?;
    writeln!(out, "CSV Results")?;
    write_csv_header(&mut out)?;
    results.write_csv_row(&mut out)?;
    Ok(())
}

fn run_simulation_matrix(rounds: usize) -> Result<()> {
    let mut out = io::stdout().lock();
    write_csv_header(&mut out)?;
    for results in run_matrix(rounds) {
        results.write_csv_row(&mut out)?;
    }
    writeln!(out, "Matrix simulation complete")?;
    Ok(())
}
