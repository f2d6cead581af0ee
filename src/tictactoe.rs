//! Tic-Tac-Toe board model: codec, pattern matching, status evaluation and symmetry

pub mod board;
pub mod encoding;
pub mod game;
pub mod lines;
pub mod symmetry;

pub use board::{Board, Cell, Player};
pub use encoding::{POW3, STATE_COUNT, StateIndex, decode, encode};
pub use game::{GameStatus, board_status, status};
pub use lines::{WINNING_LINES, line_pattern, matches};
pub use symmetry::{SymmetricTable, swap_state};
