//! Responder port - anything that can take a turn in a game
//!
//! The self-play driver only ever talks to players through this trait, so the
//! pruning agent, a random baseline and a scripted opponent are interchangeable.

use crate::tictactoe::{Board, Player};

/// A participant in a game driven board-by-board.
///
/// Boards are always in the driver's orientation: `O` pieces are O's and `X`
/// pieces are X's, whichever side the responder plays.
pub trait Responder: Send {
    /// Begin a new game playing `side`. Returns the empty board.
    fn start(&mut self, side: Player) -> Board;

    /// Answer the current board with the board after this responder's move.
    ///
    /// `None` in means the game is already over and is passed straight back.
    /// `None` out means this responder has nothing further to play, either
    /// because the game has ended or because it declines to move.
    fn respond(&mut self, board: Option<&Board>) -> Option<Board>;

    /// Get the responder's name.
    ///
    /// Used for identification in reports and logging.
    fn name(&self) -> &str;
}
