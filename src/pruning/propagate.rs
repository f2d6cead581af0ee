//! Backward pruning of moves proven to lose
//!
//! When a game is lost, the last move the agent made is removed from the move
//! set of every position it could have been played from. If that leaves a
//! position with no moves at all, reaching that position is itself a loss, so
//! every X move that led into it becomes a bad move in turn. The cascade runs
//! breadth-first over a FIFO worklist and terminates because edges are only ever
//! removed from a finite graph.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::graph::StateSpaceGraph;
use crate::tictactoe::{Cell, StateIndex};

/// Summary of one prune-and-propagate run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    /// Bad moves taken off the worklist
    pub visited: usize,
    /// Edges deleted from the move table
    pub removed_edges: usize,
    /// Positions whose move set became empty
    pub exhausted_states: usize,
}

/// Forget `bad_move` and cascade to ancestors left without moves.
pub fn prune_and_propagate(graph: &mut StateSpaceGraph, bad_move: StateIndex) -> PruneReport {
    let mut report = PruneReport::default();
    let mut worklist = VecDeque::from([bad_move]);

    while let Some(bad) = worklist.pop_front() {
        report.visited += 1;
        trace!(%bad, "examining bad move");

        for square in bad.positions_of(Cell::O) {
            let prev = bad.cleared(square);
            let Some(moves) = graph.moves_mut(prev) else {
                continue;
            };
            if !moves.remove(bad) {
                continue;
            }

            report.removed_edges += 1;
            debug!(%prev, %bad, remaining = moves.len(), "pruned losing move");

            if moves.is_empty() {
                report.exhausted_states += 1;
                for opponent_square in prev.positions_of(Cell::X) {
                    let ancestor = prev.cleared(opponent_square);
                    debug!(%prev, %ancestor, "position exhausted, propagating to ancestor");
                    worklist.push_back(ancestor);
                }
            }
        }
    }

    report
}
