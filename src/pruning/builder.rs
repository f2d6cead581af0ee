//! Builder for constructing pruning agents

use rand::{SeedableRng, rngs::StdRng};

use super::{agent::PruningAgent, graph::StateSpaceGraph};
use crate::app::AgentConfig;

/// Builder for [`PruningAgent`].
///
/// # Examples
///
/// ```
/// use xnos::pruning::PruningAgentBuilder;
///
/// let agent = PruningAgentBuilder::new().seed(7).build();
/// assert_eq!(agent.stats().pruned_moves, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PruningAgentBuilder {
    seed: Option<u64>,
}

impl PruningAgentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an [`AgentConfig`].
    pub fn from_config(config: &AgentConfig) -> Self {
        Self { seed: config.seed }
    }

    /// Seed the agent's RNG for reproducible play.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enumerate the state space and build the agent.
    pub fn build(self) -> PruningAgent {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        PruningAgent::from_parts(StateSpaceGraph::build(), rng)
    }
}
