//! Symbol-swap symmetry between O and X

use super::{
    board::Board,
    encoding::{STATE_COUNT, StateIndex, decode, encode},
};

/// Encoded state with every O turned into X and vice versa.
pub fn swap_state(state: StateIndex) -> StateIndex {
    encode(&decode(state).swap_symbols())
}

/// Precomputed [`swap_state`] for every encoded state.
#[derive(Debug, Clone)]
pub struct SymmetricTable {
    swapped: Vec<StateIndex>,
}

impl SymmetricTable {
    pub fn build() -> Self {
        let mut swapped = Vec::with_capacity(STATE_COUNT);
        swapped.extend(StateIndex::all().map(swap_state));
        SymmetricTable { swapped }
    }

    pub fn get(&self, state: StateIndex) -> StateIndex {
        self.swapped[state.as_usize()]
    }

    /// Swap the symbols of a board through the table.
    pub fn swap_board(&self, board: &Board) -> Board {
        decode(self.get(encode(board)))
    }

    pub fn len(&self) -> usize {
        self.swapped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swapped.is_empty()
    }
}

impl Default for SymmetricTable {
    fn default() -> Self {
        Self::build()
    }
}
