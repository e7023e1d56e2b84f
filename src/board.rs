//! The 3x3 board and its structural queries.
//!
//! A [`Board`] is a plain `Copy` value: nine cells, each empty or holding one
//! of the two tokens. Placement is checked; removal is not, since it only ever
//! undoes a placement made by the caller.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, LINES, N};
use crate::error::BoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    X,
    O,
}

impl Token {
    pub fn opponent(self) -> Token {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Token::X => 'X',
            Token::O => 'O',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Token(Token),
}

impl Cell {
    fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Token(token) => token.as_char(),
        }
    }
}

/// A cell coordinate, both components in `0..N`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a move from a row-major cell index.
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: idx / N,
            col: idx % N,
        }
    }

    /// Row-major cell index of this move.
    #[inline]
    pub fn index(self) -> usize {
        self.row * N + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Terminal evaluation of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Token),
    Tie,
    Ongoing,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit rows, as in a test fixture.
    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                board.cells[r * N + c] = cell;
            }
        }
        board
    }

    #[inline]
    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    /// Cell at `(row, col)`. Out-of-range coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= N || col >= N {
            return Cell::Empty;
        }
        self.cells[Self::idx(row, col)]
    }

    #[inline]
    pub fn cell_at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        row < N && col < N && self.cells[Self::idx(row, col)] == Cell::Empty
    }

    /// Place `token` at `(row, col)`.
    ///
    /// Returns `false` without touching the board if the coordinates are off
    /// the grid or the cell is already occupied.
    pub fn place_token(&mut self, row: usize, col: usize, token: Token) -> bool {
        if row >= N || col >= N {
            tracing::debug!(row, col, "row and col must be between 0 and {}", N - 1);
            return false;
        }
        let idx = Self::idx(row, col);
        if self.cells[idx] != Cell::Empty {
            return false;
        }
        self.cells[idx] = Cell::Token(token);
        true
    }

    /// Reset `(row, col)` to empty. No check is made that the cell was
    /// occupied; callers use this only to undo their own placement.
    pub fn remove_token(&mut self, row: usize, col: usize) {
        self.cells[Self::idx(row, col)] = Cell::Empty;
    }

    /// True iff some line is entirely held by `token`.
    pub fn check_win_for_player(&self, token: Token) -> bool {
        let owned = Cell::Token(token);
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == owned))
    }

    /// True iff some line is entirely held by one token, either one.
    pub fn check_win(&self) -> bool {
        self.winner().is_some()
    }

    /// The token holding a complete line, if any.
    pub fn winner(&self) -> Option<Token> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Cell::Token(t) if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] => {
                Some(t)
            }
            _ => None,
        })
    }

    /// True iff no cell is empty, regardless of whether a line is complete.
    pub fn check_tie(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Terminal state of the board. A win takes precedence over a full board.
    pub fn outcome(&self) -> Outcome {
        if let Some(token) = self.winner() {
            Outcome::Win(token)
        } else if self.check_tie() {
            Outcome::Tie
        } else {
            Outcome::Ongoing
        }
    }

    /// Empty cells in row-major order.
    pub fn open_moves(&self) -> Vec<Move> {
        (0..CELLS)
            .filter(|&i| self.cells[i] == Cell::Empty)
            .map(Move::from_index)
            .collect()
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse nine cells written row by row. `X` and `O` (either case) are
    /// tokens, `.` `_` and `-` are empty; `/` and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut n = 0;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Token(Token::X),
                'O' | 'o' => Cell::Token(Token::O),
                '.' | '_' | '-' => Cell::Empty,
                '/' => continue,
                c if c.is_whitespace() => continue,
                c => {
                    return Err(BoardError::InvalidCell {
                        character: c,
                        position: n,
                    });
                }
            };
            if n < CELLS {
                board.cells[n] = cell;
            }
            n += 1;
        }
        if n != CELLS {
            return Err(BoardError::InvalidLength { got: n });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0|1|2")?;
        for row in 0..N {
            writeln!(f, "   -----")?;
            writeln!(
                f,
                " {row} {}|{}|{}",
                self.get(row, 0).as_char(),
                self.get(row, 1).as_char(),
                self.get(row, 2).as_char()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_place_token_rejects_occupied_and_out_of_range() {
        let mut b = Board::new();
        assert!(b.place_token(1, 1, Token::X));
        assert!(!b.place_token(1, 1, Token::O));
        assert_eq!(b.get(1, 1), Cell::Token(Token::X));

        let before = b;
        assert!(!b.place_token(3, 0, Token::O));
        assert!(!b.place_token(0, 7, Token::O));
        assert_eq!(b, before);
    }

    #[test]
    fn test_place_then_remove_restores_cell() {
        let start = board("X.O/.../..X");
        let mut b = start;
        assert!(b.place_token(1, 2, Token::O));
        b.remove_token(1, 2);
        assert_eq!(b, start);
    }

    #[test]
    fn test_winner_and_outcome() {
        assert_eq!(board("XXX/OO./...").outcome(), Outcome::Win(Token::X));
        assert_eq!(board("XO./XO./.O.").outcome(), Outcome::Win(Token::O));
        assert_eq!(board("XOX/XOO/OXX").outcome(), Outcome::Tie);
        assert_eq!(board("X../.O./...").outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_full_board_with_line_is_win_and_tie() {
        let b = board("XXX/OOX/XOO");
        assert!(b.check_win());
        assert!(b.check_tie());
        assert_eq!(b.outcome(), Outcome::Win(Token::X));
    }

    #[test]
    fn test_open_moves_row_major() {
        let b = board("X.O/.X./O..");
        let moves: Vec<_> = b.open_moves().iter().map(|m| (m.row, m.col)).collect();
        assert_eq!(moves, vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(b.open_count(), 5);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardError::InvalidLength { got: 2 })
        );
        assert_eq!(
            "XOX/O?./...".parse::<Board>(),
            Err(BoardError::InvalidCell {
                character: '?',
                position: 4
            })
        );
        assert_eq!(
            "XOX/OXO/XOXO".parse::<Board>(),
            Err(BoardError::InvalidLength { got: 10 })
        );
    }

    #[test]
    fn test_display() {
        let b = board("X../.O./...");
        let s = b.to_string();
        assert!(s.starts_with("   0|1|2\n   -----\n 0 X| | \n"));
        assert!(s.contains(" 1  |O| \n"));
    }

    #[test]
    fn test_move_index_roundtrip() {
        for i in 0..CELLS {
            assert_eq!(Move::from_index(i).index(), i);
        }
        assert_eq!(Move::new(2, 1).to_string(), "2,1");
    }
}
