//! Status command - Report the outcome marker of a board

use anyhow::{Context, Result};
use clap::Parser;

use crate::tictactoe::{Board, GameStatus, board_status, encode};

#[derive(Parser, Debug)]
#[command(about = "Print the status of a board")]
pub struct StatusArgs {
    /// Board as nine symbols (`.`, `O`, `X`); rows may be split by `/` or newlines
    pub board: String,
}

pub fn execute(args: StatusArgs) -> Result<()> {
    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let status = board_status(&board);

    println!("{board}");
    println!("Encoded state: {}", encode(&board).value());
    println!("Status: {} ({})", status.marker(), describe(status));
    Ok(())
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => "in progress".to_string(),
        GameStatus::Won(player) => format!("{player} wins"),
        GameStatus::Draw => "draw".to_string(),
    }
}
