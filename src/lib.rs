//! Tictactoe-Rust: tic-tac-toe with minimax computer players.
//!
//! This crate provides a 3x3 board, an exhaustive minimax search engine, an
//! interactive console game, and a batch simulator for pitting computer
//! players of different strengths against each other.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, scores, difficulty range
//! - [`board`] - Board state, placement, win and tie detection
//! - [`search`] - Minimax with row-major or randomized move order
//! - [`game`] - Players, turn order, move results
//! - [`console`] - Line-driven interactive session
//! - [`simulation`] - Computer-vs-computer batch runs with CSV output
//! - [`error`] - Parse error types
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::board::{Board, Move, Token};
//! use tictactoe_rust::search::best_move;
//!
//! // O completes the middle row.
//! let board: Board = "XX./OO./X..".parse().unwrap();
//! assert_eq!(best_move(board, 3, Token::O), Some(Move::new(1, 2)));
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod search;
pub mod simulation;
