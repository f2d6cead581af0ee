//! Base-3 state encoding
//!
//! Every board maps to a unique integer in `[0, 3^9)`: the digit at position `p`
//! (row-major, 0-8) holds the cell at `p` with 0 = empty, 1 = O, 2 = X. The whole
//! state space is small enough to index flat tables by this value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};

/// Number of distinct encoded states (3^9)
pub const STATE_COUNT: usize = 19_683;

/// Powers of three for each board position
pub const POW3: [u16; 9] = [1, 3, 9, 27, 81, 243, 729, 2187, 6561];

/// Encoded board state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct StateIndex(u16);

impl StateIndex {
    /// The empty board
    pub const EMPTY: StateIndex = StateIndex(0);

    /// Wrap a raw value, returning `None` when it is outside `[0, 3^9)`.
    pub fn new(value: u16) -> Option<Self> {
        ((value as usize) < STATE_COUNT).then_some(StateIndex(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate every encoded state in ascending order.
    pub fn all() -> impl Iterator<Item = StateIndex> {
        (0..STATE_COUNT as u16).map(StateIndex)
    }

    /// Base-3 digit at `pos`
    pub fn digit(self, pos: usize) -> u16 {
        (self.0 / POW3[pos]) % 3
    }

    pub fn cell(self, pos: usize) -> Cell {
        Cell::from_digit(self.digit(pos))
    }

    /// State with O placed on the empty square `pos`.
    pub fn place_o(self, pos: usize) -> StateIndex {
        debug_assert_eq!(self.digit(pos), 0, "square {pos} is not empty");
        StateIndex(self.0 + POW3[pos])
    }

    /// State with square `pos` cleared, whatever it held.
    pub fn cleared(self, pos: usize) -> StateIndex {
        StateIndex(self.0 - self.digit(pos) * POW3[pos])
    }

    /// Positions holding `cell`, in ascending order.
    pub fn positions_of(self, cell: Cell) -> impl Iterator<Item = usize> {
        let target = cell.digit();
        (0..9).filter(move |&pos| self.digit(pos) == target)
    }
}

impl fmt::Display for StateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Encode a board to its state index
pub fn encode(board: &Board) -> StateIndex {
    let value = board
        .cells
        .iter()
        .zip(POW3)
        .map(|(cell, power)| cell.digit() * power)
        .sum();
    StateIndex(value)
}

/// Decode a state index back to a board
pub fn decode(state: StateIndex) -> Board {
    let mut cells = [Cell::Empty; 9];
    for (pos, cell) in cells.iter_mut().enumerate() {
        *cell = state.cell(pos);
    }
    Board::from_cells(cells)
}
