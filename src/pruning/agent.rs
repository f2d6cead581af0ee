//! Pruning agent that learns Tic-Tac-Toe by forgetting losing moves.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::{
    builder::PruningAgentBuilder,
    graph::StateSpaceGraph,
    propagate::{PruneReport, prune_and_propagate},
};
use crate::tictactoe::{Board, GameStatus, Player, StateIndex, decode, encode, status};

/// Where the agent is in its game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Idle,
    Playing,
}

/// Pruning learning agent
///
/// The agent owns its state-space graph for its whole lifetime. Games only
/// reset the side it plays and the pending move; everything it has forgotten
/// stays forgotten.
pub struct PruningAgent {
    graph: StateSpaceGraph,
    side: Player,
    pending_move: Option<StateIndex>,
    phase: SessionPhase,
    rng: StdRng,
    losses_seen: usize,
    pruned_moves: usize,
    resignations: usize,
}

impl std::fmt::Debug for PruningAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PruningAgent")
            .field("side", &self.side)
            .field("phase", &self.phase)
            .field("pending_move", &self.pending_move)
            .field("remaining_moves", &self.graph.remaining_moves())
            .finish()
    }
}

impl PruningAgent {
    /// Create a new builder for constructing a pruning agent.
    ///
    /// # Example
    /// ```
    /// use xnos::pruning::PruningAgent;
    ///
    /// let agent = PruningAgent::builder().seed(42).build();
    /// assert!(agent.pending_move().is_none());
    /// ```
    pub fn builder() -> PruningAgentBuilder {
        PruningAgentBuilder::new()
    }

    /// Create an agent with an optional RNG seed.
    pub fn new(seed: Option<u64>) -> Self {
        let mut builder = Self::builder();
        if let Some(s) = seed {
            builder = builder.seed(s);
        }
        builder.build()
    }

    pub(crate) fn from_parts(graph: StateSpaceGraph, rng: StdRng) -> Self {
        PruningAgent {
            graph,
            side: Player::O,
            pending_move: None,
            phase: SessionPhase::Idle,
            rng,
            losses_seen: 0,
            pruned_moves: 0,
            resignations: 0,
        }
    }

    /// Begin a new game playing `side` (O when `None`). Returns the empty board.
    pub fn start(&mut self, side: Option<Player>) -> Board {
        self.side = side.unwrap_or_default();
        self.pending_move = None;
        self.phase = SessionPhase::Playing;
        trace!(side = %self.side, "starting game");
        decode(StateIndex::EMPTY)
    }

    /// Answer `board` with the agent's next board.
    ///
    /// `None` is the end-of-game sentinel in both directions: it is passed straight
    /// through, and it is returned when the game has finished or when the agent
    /// knows no move from this position that has not been proven to lose.
    pub fn respond(&mut self, board: Option<&Board>) -> Option<Board> {
        let board = board?;

        let state = self.to_internal(encode(board));
        let current = status(state);

        if current == GameStatus::Won(Player::X) {
            self.learn_from_loss();
        }

        if current.is_over() {
            self.pending_move = None;
            self.phase = SessionPhase::Idle;
            return None;
        }

        let Some(moves) = self.graph.moves(state) else {
            debug!(%state, "no move table for this position, treating as game over");
            self.phase = SessionPhase::Idle;
            return None;
        };
        let Some(choice) = moves.choose(&mut self.rng) else {
            info!(%state, "every known move from this position loses, resigning");
            self.resignations += 1;
            self.phase = SessionPhase::Idle;
            return None;
        };

        trace!(%state, %choice, "chose move");
        self.pending_move = Some(choice);
        if status(choice).is_over() {
            self.pending_move = None;
        }

        Some(decode(self.to_external(choice)))
    }

    fn learn_from_loss(&mut self) {
        self.losses_seen += 1;
        match self.pending_move.take() {
            Some(bad) => {
                let PruneReport {
                    removed_edges,
                    exhausted_states,
                    ..
                } = prune_and_propagate(&mut self.graph, bad);
                self.pruned_moves += removed_edges;
                debug!(%bad, removed_edges, exhausted_states, "learned from loss");
            }
            None => warn!("lost a game without a recorded move, nothing to prune"),
        }
    }

    fn to_internal(&self, state: StateIndex) -> StateIndex {
        match self.side {
            Player::O => state,
            Player::X => self.graph.symmetric().get(state),
        }
    }

    fn to_external(&self, state: StateIndex) -> StateIndex {
        // The swap is an involution, so both directions use the same table.
        self.to_internal(state)
    }

    /// Side played in the current game
    pub fn side(&self) -> Player {
        self.side
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Last move made this game, in the agent's internal O perspective.
    pub fn pending_move(&self) -> Option<StateIndex> {
        self.pending_move
    }

    /// Access the underlying state-space graph.
    pub fn graph(&self) -> &StateSpaceGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut StateSpaceGraph {
        &mut self.graph
    }

    /// Boards the agent would still consider answering `board` with when playing
    /// `side`, in the caller's orientation. `None` when it never moves there.
    pub fn surviving_moves(&self, board: &Board, side: Player) -> Option<Vec<Board>> {
        let swap = |state: StateIndex| match side {
            Player::O => state,
            Player::X => self.graph.symmetric().get(state),
        };
        let moves = self.graph.moves(swap(encode(board)))?;
        Some(moves.successors().map(|next| decode(swap(next))).collect())
    }

    /// Get statistics about the agent
    pub fn stats(&self) -> AgentStats {
        AgentStats {
            applicable_states: self.graph.applicable_states(),
            remaining_moves: self.graph.remaining_moves(),
            exhausted_states: self.graph.exhausted_states(),
            pruned_moves: self.pruned_moves,
            losses_seen: self.losses_seen,
            resignations: self.resignations,
        }
    }
}

/// Statistics about a pruning agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub applicable_states: usize,
    pub remaining_moves: usize,
    pub exhausted_states: usize,
    pub pruned_moves: usize,
    pub losses_seen: usize,
    pub resignations: usize,
}
