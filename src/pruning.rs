//! Pruning learner
//!
//! The agent starts out willing to play every legal move and forgets moves as
//! they are proven to lose.

pub mod agent;
pub mod builder;
pub mod graph;
pub mod move_set;
pub mod propagate;

pub use agent::{AgentStats, PruningAgent, SessionPhase};
pub use builder::PruningAgentBuilder;
pub use graph::{StateSpaceGraph, is_decision_state};
pub use move_set::MoveSet;
pub use propagate::{PruneReport, prune_and_propagate};
