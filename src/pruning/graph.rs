//! Full state-space transition graph from O's perspective
//!
//! Built once per agent by enumerating all 3^9 encoded states. Each entry of the
//! move table is either `None` (not a position where O moves: bad piece counts or
//! a finished game) or a [`MoveSet`] that starts with every legal O placement and
//! only ever shrinks as the agent learns.

use tracing::debug;

use super::move_set::MoveSet;
use crate::tictactoe::{Cell, STATE_COUNT, StateIndex, SymmetricTable, decode, status};

/// Move table plus symbol-swap table
#[derive(Debug, Clone)]
pub struct StateSpaceGraph {
    moves: Vec<Option<MoveSet>>,
    symmetric: SymmetricTable,
}

/// Whether `state` is a position the agent moves from.
///
/// O is on turn when it has as many pieces as X (O opened) or one fewer (X
/// opened). Finished games have no moves.
pub fn is_decision_state(state: StateIndex) -> bool {
    let board = decode(state);
    let difference = board.count(Cell::O) as isize - board.count(Cell::X) as isize;
    matches!(difference, -1 | 0) && !status(state).is_over()
}

impl StateSpaceGraph {
    /// Enumerate every encoded state and build the initial move table.
    pub fn build() -> Self {
        let symmetric = SymmetricTable::build();
        let mut moves = Vec::with_capacity(STATE_COUNT);
        for state in StateIndex::all() {
            moves.push(is_decision_state(state).then(|| MoveSet::all_moves(state)));
        }

        let graph = StateSpaceGraph { moves, symmetric };
        debug!(
            applicable_states = graph.applicable_states(),
            edges = graph.remaining_moves(),
            "built state-space graph"
        );
        graph
    }

    /// Surviving moves for `state`, or `None` if O never moves there.
    pub fn moves(&self, state: StateIndex) -> Option<&MoveSet> {
        self.moves[state.as_usize()].as_ref()
    }

    pub fn moves_mut(&mut self, state: StateIndex) -> Option<&mut MoveSet> {
        self.moves[state.as_usize()].as_mut()
    }

    pub fn is_applicable(&self, state: StateIndex) -> bool {
        self.moves[state.as_usize()].is_some()
    }

    pub fn symmetric(&self) -> &SymmetricTable {
        &self.symmetric
    }

    /// Number of states that have a move set at all
    pub fn applicable_states(&self) -> usize {
        self.moves.iter().flatten().count()
    }

    /// Total surviving edges
    pub fn remaining_moves(&self) -> usize {
        self.moves.iter().flatten().map(MoveSet::len).sum()
    }

    /// Applicable states whose move set has been pruned to nothing
    pub fn exhausted_states(&self) -> usize {
        self.moves.iter().flatten().filter(|set| set.is_empty()).count()
    }
}

impl Default for StateSpaceGraph {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, encode};

    #[test]
    fn test_empty_board_has_nine_moves() {
        let graph = StateSpaceGraph::build();
        assert_eq!(graph.moves(StateIndex::EMPTY).map(MoveSet::len), Some(9));
        assert_eq!(graph.exhausted_states(), 0);
    }

    #[test]
    fn test_x_to_move_is_not_applicable() {
        let graph = StateSpaceGraph::build();
        let o_ahead: Board = "O..\n...\n...".parse().unwrap();
        assert!(!graph.is_applicable(encode(&o_ahead)));

        let x_ahead: Board = "X..\n...\n...".parse().unwrap();
        assert_eq!(graph.moves(encode(&x_ahead)).map(MoveSet::len), Some(8));
    }

    #[test]
    fn test_terminal_states_are_not_applicable() {
        let graph = StateSpaceGraph::build();
        let x_won: Board = "XXX\nOO.\n...".parse().unwrap();
        assert!(!graph.is_applicable(encode(&x_won)));
        let unbalanced: Board = "XXX\n...\n...".parse().unwrap();
        assert!(!graph.is_applicable(encode(&unbalanced)));
    }
}
