//! Integration tests for board queries and full games.

use tictactoe_rust::board::{Board, Cell, Move, Outcome, Token};
use tictactoe_rust::console::ConsoleSession;
use tictactoe_rust::constants::CELLS;
use tictactoe_rust::game::{Game, MoveResult, Player};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

const X: Cell = Cell::Token(Token::X);
const O: Cell = Cell::Token(Token::O);
const E: Cell = Cell::Empty;

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_check_win_for_player() {
    let cases = [
        ("row", "XXX/.../...", Token::X, true),
        ("column", "X../X../X..", Token::X, true),
        ("diagonal", "X../.X./..X", Token::X, true),
        ("anti-diagonal", "..O/.O./O..", Token::O, true),
        ("no line", "XOX/OXO/OXO", Token::X, false),
        ("other player's line", "OOO/XX./X..", Token::X, false),
        ("empty board", ".../.../...", Token::X, false),
        ("empty board", ".../.../...", Token::O, false),
    ];
    for (name, s, token, expected) in cases {
        assert_eq!(board(s).check_win_for_player(token), expected, "{name}: {s}");
    }
}

#[test]
fn test_check_win_any_player() {
    assert!(board("OOO/XX./X..").check_win());
    assert!(board("X.O/XO./O.X").check_win());
    assert!(!board(".../.../...").check_win());
    assert!(!board("XOX/OXO/OXO").check_win());
    // Mixed lines never count.
    assert!(!board("XXO/OOX/XXO").check_win());
}

#[test]
fn test_every_line_is_detected() {
    let lines = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];
    for line in lines {
        let mut b = Board::new();
        for (r, c) in line {
            assert!(b.place_token(r, c, Token::O));
        }
        assert!(b.check_win_for_player(Token::O), "{line:?}");
        assert!(!b.check_win_for_player(Token::X), "{line:?}");
        assert_eq!(b.winner(), Some(Token::O));
    }
}

// =============================================================================
// Tie detection
// =============================================================================

#[test]
fn test_check_tie_is_only_about_empty_cells() {
    assert!(board("XOX/XOO/OXX").check_tie());
    // Full and won at the same time still counts as full.
    assert!(board("XXX/OOX/XOO").check_tie());
    assert!(!board("XOX/XOO/OX.").check_tie());
    assert!(!Board::new().check_tie());
}

#[test]
fn test_tie_becomes_true_only_on_last_cell() {
    let mut b = Board::new();
    for i in 0..CELLS {
        assert!(!b.check_tie());
        let token = if i % 2 == 0 { Token::X } else { Token::O };
        let mv = Move::from_index(i);
        assert!(b.place_token(mv.row, mv.col, token));
    }
    assert!(b.check_tie());
}

// =============================================================================
// Placement and removal
// =============================================================================

#[test]
fn test_place_and_remove_every_cell() {
    let start = board("X.O/.../..X");
    for mv in start.open_moves() {
        let mut b = start;
        assert!(b.place_token(mv.row, mv.col, Token::O));
        assert_eq!(b.get(mv.row, mv.col), O);
        b.remove_token(mv.row, mv.col);
        assert_eq!(b, start);
    }
}

#[test]
fn test_from_rows_matches_parse() {
    let b = Board::from_rows([[X, O, X], [O, X, O], [X, O, E]]);
    assert_eq!(b, board("XOX/OXO/XO."));
    assert_eq!(b, board("x o x\no x o\nx o _"));
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_computer_never_loses_to_first_empty_cell_player() {
    let mut game = Game::new(
        Player::human(Token::X, "naive"),
        Player::computer(Token::O, Some(9), "engine"),
        false,
    );
    loop {
        let result = if game.next_player().is_computer() {
            let mv = game.computer_move().unwrap();
            game.do_move(mv.row, mv.col)
        } else {
            let mv = game.board.open_moves()[0];
            game.do_move(mv.row, mv.col)
        };
        match result {
            MoveResult::Valid => continue,
            MoveResult::Rejected => panic!("rejected move\n{}", game.board),
            _ => break,
        }
    }
    assert_ne!(game.outcome(), Outcome::Win(Token::X), "\n{}", game.board);
}

#[test]
fn test_console_session_over_buffers() {
    let input = "2\n5\n1,1\n\nq\n";
    let mut output = Vec::new();
    let mut session = ConsoleSession::new(false);
    session.run(input.as_bytes(), &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Welcome to Tic-Tac-Toe!"));
    assert!(text.contains("Player 2 (O, computer) will search 4 plies ahead."));
    assert!(text.contains("Player 2 (O, computer) plays"));
    assert!(text.ends_with("Thanks for playing!\n"));
}
