//! Application configuration.
//!
//! ```
//! use xnos::app::AgentConfig;
//! use xnos::pruning::PruningAgentBuilder;
//!
//! let config = AgentConfig::new().with_seed(42);
//! let agent = PruningAgentBuilder::from_config(&config).build();
//! assert_eq!(agent.stats().losses_seen, 0);
//! ```

pub mod config;

pub use config::{AgentConfig, SelfPlayConfig};
