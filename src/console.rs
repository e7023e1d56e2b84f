//! Interactive console session.
//!
//! The session is a small line-driven state machine:
//!
//! - Menu: `1` human vs human, `2` human vs computer, `3` computer vs computer
//! - Difficulty prompts for each computer player (levels 1-10)
//! - Play: humans type `row,col`; on a computer's turn any line (usually just
//!   Enter) lets it move
//!
//! `q` quits from any state. After a game ends the menu is shown again.
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe_rust::console::ConsoleSession;
//! let mut session = ConsoleSession::new(false);
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};

use crate::board::{Move, Token};
use crate::constants::{MAX_LEVEL, MIN_LEVEL, N};
use crate::error::InputError;
use crate::game::{Game, MoveResult, Player};

const MENU_PROMPT: &str = "Enter '1' to play against a friend, '2' to play against the computer, \
or '3' for two computer players to square off! Press 'q' to quit.";

/// What the session wants printed after handling a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit(String),
}

impl Step {
    pub fn text(&self) -> &str {
        match self {
            Step::Continue(s) | Step::Quit(s) => s,
        }
    }
}

enum State {
    Menu,
    Playing(Game),
}

pub struct ConsoleSession {
    state: State,
    random_ai: bool,
}

impl ConsoleSession {
    /// Create a session at the main menu. `random_ai` selects the randomized
    /// search for every computer player.
    pub fn new(random_ai: bool) -> Self {
        Self {
            state: State::Menu,
            random_ai,
        }
    }

    pub fn greeting() -> String {
        format!("Welcome to Tic-Tac-Toe!\n{MENU_PROMPT}\n")
    }

    /// Read lines from `input` until it ends or the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        write!(output, "{}", Self::greeting())?;
        output.flush()?;

        for line in input.lines() {
            let line = line.context("failed to read console input")?;
            let step = self.handle_line(&line);
            write!(output, "{}", step.text())?;
            output.flush()?;
            if let Step::Quit(_) = step {
                break;
            }
        }
        Ok(())
    }

    /// Handle one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Step {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Step::Quit("Thanks for playing!\n".to_string());
        }

        let state = std::mem::replace(&mut self.state, State::Menu);
        let (state, text) = match state {
            State::Menu => self.handle_menu(line),
            State::Playing(mut game) => match game.needs_difficulty() {
                Some(n) => {
                    let text = Self::handle_level(&mut game, n, line);
                    (State::Playing(game), text)
                }
                None => Self::handle_turn(game, line),
            },
        };
        self.state = state;
        Step::Continue(text)
    }

    fn handle_menu(&self, line: &str) -> (State, String) {
        let (p1, p2) = match line {
            "1" => (
                Player::human(Token::X, "Player 1 (X)"),
                Player::human(Token::O, "Player 2 (O)"),
            ),
            "2" => (
                Player::human(Token::X, "Player 1 (X)"),
                Player::computer(Token::O, None, "Player 2 (O, computer)"),
            ),
            "3" => (
                Player::computer(Token::X, None, "Player 1 (X, computer)"),
                Player::computer(Token::O, None, "Player 2 (O, computer)"),
            ),
            _ => return (State::Menu, format!("Invalid input. {MENU_PROMPT}\n")),
        };
        info!(mode = line, random_ai = self.random_ai, "new game");

        let game = Game::new(p1, p2, self.random_ai);
        let text = match game.needs_difficulty() {
            Some(n) => level_prompt(&game.player(n).name),
            None => start_text(&game),
        };
        (State::Playing(game), text)
    }

    fn handle_level(game: &mut Game, n: usize, line: &str) -> String {
        let level = match parse_level(line) {
            Ok(level) => level,
            Err(err) => return format!("{err}\n{}", level_prompt(&game.player(n).name)),
        };
        if !game.set_level(n, level) {
            warn!(player = n + 1, level, "difficulty rejected");
            return level_prompt(&game.player(n).name);
        }

        let mut text = format!("{} will search {} plies ahead.\n", game.player(n).name, level - 1);
        match game.needs_difficulty() {
            Some(next) => text.push_str(&level_prompt(&game.player(next).name)),
            None => text.push_str(&start_text(game)),
        }
        text
    }

    fn handle_turn(mut game: Game, line: &str) -> (State, String) {
        let mut text = String::new();

        let mv = if game.next_player().is_computer() {
            match game.computer_move() {
                Some(mv) => {
                    let _ = writeln!(text, "{} plays {mv}.", game.next_player().name);
                    mv
                }
                None => {
                    warn!("computer player found no open cell");
                    text.push_str(&board_and_prompt(&game));
                    return (State::Playing(game), text);
                }
            }
        } else {
            match parse_move(line) {
                Ok(mv) => mv,
                Err(err) => {
                    let _ = writeln!(text, "{err}");
                    text.push_str(&board_and_prompt(&game));
                    return (State::Playing(game), text);
                }
            }
        };

        match game.do_move(mv.row, mv.col) {
            MoveResult::Valid => {
                text.push_str(&board_and_prompt(&game));
                (State::Playing(game), text)
            }
            MoveResult::Rejected => {
                text.push_str("That space is already occupied. Please try again.\n");
                text.push_str(&board_and_prompt(&game));
                (State::Playing(game), text)
            }
            MoveResult::Win(token) => {
                let winner = if token == game.player(0).token { 1 } else { 2 };
                info!(%token, "game won");
                let _ = write!(
                    text,
                    "\n{}Game over! Player {winner} wins!\n\n{MENU_PROMPT}\n",
                    game.board
                );
                (State::Menu, text)
            }
            MoveResult::Tie => {
                info!("game tied");
                let _ = write!(text, "\n{}Game over! It's a tie!\n\n{MENU_PROMPT}\n", game.board);
                (State::Menu, text)
            }
        }
    }
}

/// Parse a move typed as `row,col`, e.g. `1,2` or `1, 2`.
pub fn parse_move(s: &str) -> Result<Move, InputError> {
    let malformed = || InputError::MalformedMove(s.trim().to_string());

    let (row, col) = s.split_once(',').ok_or_else(malformed)?;
    let row: i64 = row.trim().parse().map_err(|_| malformed())?;
    let col: i64 = col.trim().parse().map_err(|_| malformed())?;

    let range = 0..N as i64;
    if !range.contains(&row) || !range.contains(&col) {
        return Err(InputError::OutOfRange);
    }
    Ok(Move::new(row as usize, col as usize))
}

/// Parse a difficulty level in `MIN_LEVEL..=MAX_LEVEL`.
pub fn parse_level(s: &str) -> Result<usize, InputError> {
    match s.trim().parse::<usize>() {
        Ok(level) if (MIN_LEVEL..=MAX_LEVEL).contains(&level) => Ok(level),
        _ => Err(InputError::InvalidLevel),
    }
}

fn level_prompt(name: &str) -> String {
    format!("Enter the computer level ({MIN_LEVEL}-{MAX_LEVEL}) for {name}, {MAX_LEVEL} being the most difficult: ")
}

fn start_text(game: &Game) -> String {
    format!("{} goes first!\n{}", game.next_player().name, board_and_prompt(game))
}

fn board_and_prompt(game: &Game) -> String {
    let player = game.next_player();
    if player.is_computer() {
        format!("\n{}Press enter for {} to move...\n", game.board, player.name)
    } else {
        format!("\n{}{}, enter your move (row,col): ", game.board, player.name)
    }
}
