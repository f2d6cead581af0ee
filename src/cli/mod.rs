//! CLI infrastructure for the `xnos` binary
//!
//! This module provides the command-line interface for running self-play and
//! inspecting boards.

pub mod commands;
pub mod output;
