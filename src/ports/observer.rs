//! Observer port - abstraction for watching self-play runs
//!
//! Observers collect data during a run without coupling the driver to any
//! particular output format.

use crate::{
    Result,
    pipeline::Tally,
    tictactoe::{Board, GameStatus},
};

/// Observer trait for monitoring self-play
///
/// # Event Sequence
///
/// 1. `on_run_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_board(game_num, board)` - For every board a responder returns
///    - `on_game_end(game_num, status)`
/// 3. `on_set_end(set_num, tally)` - After each set
/// 4. `on_run_end()` - Once at the end
///
/// # Examples
///
/// ```
/// use xnos::{ports::Observer, tictactoe::GameStatus};
///
/// struct GameCounter {
///     games: usize,
/// }
///
/// impl Observer for GameCounter {
///     fn on_game_end(&mut self, _game_num: usize, _status: GameStatus) -> xnos::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when the run starts.
    fn on_run_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts. `game_num` counts from 0 across the whole run.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each board a responder plays.
    fn on_board(&mut self, _game_num: usize, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends with the status of its final board.
    fn on_game_end(&mut self, _game_num: usize, _status: GameStatus) -> Result<()> {
        Ok(())
    }

    /// Called after each set with that set's tally.
    fn on_set_end(&mut self, _set_num: usize, _tally: &Tally) -> Result<()> {
        Ok(())
    }

    /// Called when the run completes.
    fn on_run_end(&mut self) -> Result<()> {
        Ok(())
    }
}
