//! Moves command - List the replies a fresh agent would consider

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::print_subsection,
    pruning::PruningAgent,
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "List the moves an untrained agent keeps for a board")]
pub struct MovesArgs {
    /// Board as nine symbols (`.`, `O`, `X`); rows may be split by `/` or newlines
    pub board: String,

    /// Side the agent plays (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub side: String,
}

pub fn execute(args: MovesArgs) -> Result<()> {
    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let side = Player::parse_token(&args.side)
        .with_context(|| format!("invalid --side '{}'", args.side))?;

    let agent = PruningAgent::new(None);
    match agent.surviving_moves(&board, side) {
        None => println!("{side} does not move from this board"),
        Some(replies) if replies.is_empty() => println!("No surviving moves"),
        Some(replies) => {
            println!("{} candidate replies for {side}:", replies.len());
            for (i, reply) in replies.iter().enumerate() {
                print_subsection(&format!("#{}", i + 1));
                println!("{reply}");
            }
        }
    }
    Ok(())
}
