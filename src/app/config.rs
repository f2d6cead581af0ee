//! Configuration types for agent creation and self-play runs.

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Configuration for creating a pruning agent.
///
/// # Examples
///
/// ```
/// use xnos::app::AgentConfig;
///
/// let config = AgentConfig::new().with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Non-deterministic agent configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration for a self-play run between two pruning agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of sets; a tally is reported after each one
    pub sets: usize,

    /// Games played in each set
    pub games_per_set: usize,

    /// Base random seed; the two agents derive their own seeds from it
    pub seed: Option<u64>,

    /// Side that moves first in every game
    pub first_player: Player,

    /// Record the first game of each set for display
    pub demo: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            sets: 10,
            games_per_set: 1000,
            seed: None,
            first_player: Player::X,
            demo: true,
        }
    }
}

impl SelfPlayConfig {
    /// Total games across all sets
    pub fn total_games(&self) -> usize {
        self.sets * self.games_per_set
    }

    /// Seed configuration for the agent playing `side`.
    pub fn agent_config(&self, side: Player) -> AgentConfig {
        match (self.seed, side) {
            (Some(seed), Player::O) => AgentConfig::new().with_seed(seed),
            (Some(seed), Player::X) => AgentConfig::new().with_seed(seed.wrapping_add(1)),
            (None, _) => AgentConfig::new(),
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when there would be nothing to play.
    pub fn validate(&self) -> crate::Result<()> {
        if self.sets == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "sets must be at least 1".to_string(),
            });
        }
        if self.games_per_set == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "games per set must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
