//! Game status evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Cell, Player},
    encoding::{StateIndex, encode},
    lines::{WINNING_LINES, line_pattern, matches},
};

/// Status of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Single-character marker: `.` in progress, `O`/`X` for the winner, `-` for a draw.
    pub fn marker(self) -> char {
        match self {
            GameStatus::InProgress => Cell::Empty.to_char(),
            GameStatus::Won(player) => player.to_char(),
            GameStatus::Draw => '-',
        }
    }

    /// Swap the winner perspective (X <-> O).
    pub fn swap_players(self) -> Self {
        match self {
            GameStatus::Won(player) => GameStatus::Won(player.opponent()),
            other => other,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Evaluate an encoded state.
///
/// Lines are checked rows first, then columns, then diagonals; for each line the
/// all-O pattern is tried before the all-X one.
pub fn status(state: StateIndex) -> GameStatus {
    for line in &WINNING_LINES {
        for player in [Player::O, Player::X] {
            if matches(state, line_pattern(line, player.to_cell())) {
                return GameStatus::Won(player);
            }
        }
    }

    if (0..9).any(|pos| state.cell(pos) == Cell::Empty) {
        GameStatus::InProgress
    } else {
        GameStatus::Draw
    }
}

/// Evaluate a board
pub fn board_status(board: &Board) -> GameStatus {
    status(encode(board))
}
