//! Observer adapters for self-play runs

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use super::selfplay::Tally;
use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameStatus},
};

/// Progress bar observer - shows run progress with a running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: Tally,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: Tally::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "O:{} X:{} D:{}",
            self.tally.o_wins, self.tally.x_wins, self.tally.draws
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, status: GameStatus) -> Result<()> {
        self.tally.record(status);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Boards of one recorded game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub game_num: usize,
    pub boards: Vec<Board>,
    pub status: Option<GameStatus>,
}

/// Records every board of every `every`-th game (game 0, `every`, `2 * every`, ...)
pub struct TranscriptObserver {
    every: usize,
    current: Option<Transcript>,
    transcripts: Vec<Transcript>,
}

impl TranscriptObserver {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
            current: None,
            transcripts: Vec::new(),
        }
    }

    pub fn transcripts(&self) -> &[Transcript] {
        &self.transcripts
    }

    pub fn into_transcripts(self) -> Vec<Transcript> {
        self.transcripts
    }
}

impl Observer for TranscriptObserver {
    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        self.current = game_num.is_multiple_of(self.every).then(|| Transcript {
            game_num,
            boards: Vec::new(),
            status: None,
        });
        Ok(())
    }

    fn on_board(&mut self, _game_num: usize, board: &Board) -> Result<()> {
        if let Some(transcript) = &mut self.current {
            transcript.boards.push(*board);
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, status: GameStatus) -> Result<()> {
        if let Some(mut transcript) = self.current.take() {
            transcript.status = Some(status);
            self.transcripts.push(transcript);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::{ScriptedResponder, play_game},
        tictactoe::Player,
    };

    #[test]
    fn transcript_observer_records_selected_games() {
        let mut transcripts = TranscriptObserver::new(2);
        for game_num in 0..3 {
            let mut o = ScriptedResponder::new("o", vec![3, 4, 5]);
            let mut x = ScriptedResponder::new("x", vec![0, 1, 2]);
            let mut observers: [&mut dyn Observer; 1] = [&mut transcripts];
            play_game(&mut o, &mut x, Player::X, game_num, &mut observers).unwrap();
        }

        let recorded = transcripts.transcripts();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].game_num, 0);
        assert_eq!(recorded[1].game_num, 2);
        assert_eq!(recorded[0].boards.len(), 5);
        assert_eq!(recorded[0].status, Some(GameStatus::Won(Player::X)));
        assert_eq!(recorded[0].boards[4].to_string(), "XXX\nOO.\n...");
    }
}
