//! Self-pruning noughts and crosses agent
//!
//! This crate provides:
//! - A base-3 board encoding with status evaluation over the full 3^9 state space
//! - A learning agent that starts with every legal move and forgets the ones
//!   proven to lose, cascading to earlier moves that only led to dead ends
//! - A self-play driver, baseline opponents and observers
//! - The `xnos` command-line tool

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod pruning;
pub mod tictactoe;

pub use error::{Error, Result};
pub use pruning::{AgentStats, PruningAgent};
pub use tictactoe::{Board, GameStatus, Player, StateIndex};
