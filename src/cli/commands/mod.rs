//! Subcommands of the `xnos` binary

pub mod moves;
pub mod self_play;
pub mod status;
