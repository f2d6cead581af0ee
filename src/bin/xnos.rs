//! xnos CLI - self-pruning noughts and crosses agents
//!
//! This CLI provides:
//! - Self-play between two learning agents with per-set results
//! - Status evaluation of a board
//! - Listing the moves an agent considers for a board

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xnos")]
#[command(version, about = "Noughts and crosses agents that learn by forgetting losing moves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run self-play between two pruning agents
    SelfPlay(xnos::cli::commands::self_play::SelfPlayArgs),

    /// Print the status of a board
    Status(xnos::cli::commands::status::StatusArgs),

    /// List the moves an untrained agent keeps for a board
    Moves(xnos::cli::commands::moves::MovesArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::SelfPlay(args) => xnos::cli::commands::self_play::execute(args),
        Commands::Status(args) => xnos::cli::commands::status::execute(args),
        Commands::Moves(args) => xnos::cli::commands::moves::execute(args),
    }
}
