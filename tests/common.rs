//! Common test utilities for the xnos test suite.

#![allow(dead_code)]

use xnos::tictactoe::{Board, StateIndex, encode};

/// Parse a board written with `/` or newline row separators.
pub fn board(text: &str) -> Board {
    text.parse().expect("test board should parse")
}

/// Encoded state of a board written as text.
pub fn state(text: &str) -> StateIndex {
    encode(&board(text))
}

/// O to move, X threatens both square 2 (top row) and square 6 (left column),
/// and O has no winning move of its own. Every O reply loses next turn.
pub const DOUBLE_THREAT: &str = "XX./XO./..O";

/// X's winning reply to whatever O played from [`DOUBLE_THREAT`].
pub fn finishing_move(after_o: &Board) -> usize {
    if after_o.is_empty(2) { 2 } else { 6 }
}
